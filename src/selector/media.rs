//! Image and attachment rules

/// Content images, in priority order. All matches are collected.
pub const IMAGE_SELECTORS: &[&str] = &[
    ".view_cont img",
    ".view_content img",
    ".view-content img",
    ".view_con img",
    ".board_view .content img",
    ".bbs_content img",
    ".board_content img",
    ".cont_view img",
    "#bo_v_con img",
    ".bo_v_con img",
    "#bo_v_img img",
    ".xe_content img",
    ".fr-view img",
    ".se-main-container img",
    "#articleBody img",
    ".article_view img",
    ".post-content img",
    ".entry-content img",
    "article img",
];

/// Image URLs containing any of these are decoration, not content.
pub const JUNK_IMAGE_KEYWORDS: &[&str] = &[
    "logo", "icon", "button", "btn_", "mark", "banner", "opentype", "qr", "common",
];

/// Containers that list a post's attachments.
pub const FILE_AREA_SELECTORS: &[&str] = &[
    ".file",
    ".files",
    ".file_list",
    ".file-list",
    ".fileList",
    ".file_area",
    ".filebox",
    ".file_box",
    ".attach",
    ".attach_file",
    ".attachFile",
    ".add_file",
    ".view_file",
    ".board_file",
    ".bo_v_file",
    "#bo_v_file",
    "dl.file",
];

/// Anchor texts that open a viewer instead of downloading.
pub const FILE_NOISE_LABELS: &[&str] = &[
    "미리보기", "바로보기", "뷰어", "문서뷰어", "preview", "viewer", "확대", "크게보기", "zoom",
];

/// Anchor texts that say "download" without naming the file.
pub const GENERIC_FILE_NAMES: &[&str] = &[
    "다운로드", "내려받기", "download", "파일", "첨부파일", "file", "받기", "down",
];

/// Extensions that mark a link as a downloadable document.
pub const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf", "hwp", "hwpx", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "zip", "txt", "csv",
];

/// Extensions that mark a link as an image.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Query keys whose value identifies the stored file behind a URL.
pub const SIGNATURE_KEYS: &[&str] = &[
    "idx", "fileno", "file_no", "file_cn", "filesn", "fileid", "file_id", "atchfileid",
];

/// Own-text labels that sit next to an attachment value cell.
pub const ATTACHMENT_LABEL_SELECTOR: &str = "th, dt, strong, span, label, em, b, p, div, li";
