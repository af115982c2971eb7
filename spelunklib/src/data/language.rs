//! Built-in classification tables.
//!
//! All tables are fixed at compile time and read-only for the life of a run.

/// Extension (no leading dot, case as authored) to language label.
///
/// Lookups are case-sensitive: `c` is C, `C` is not in the table.
pub const EXTENSION_LABELS: &[(&str, &str)] = &[
    ("awk", "AWK"),
    ("p", "Perl"),
    ("py", "Python"),
    ("pyl", "Python"),
    ("el", "Emacs Lisp"),
    ("elc", "Emacs Lisp"),
    ("scala", "Scala"),
    ("rs", "Rust"),
    // C family
    ("h", "C or C++ Header"),
    ("hpp", "C or C++ Header"),
    ("c", "C"),
    ("cc", "C++"),
    ("cpp", "C++"),
    ("c++", "C++"),
    ("m", "Objective C"),
    ("tcl", "TCL"),
    ("html", "HTML"),
    ("htm", "HTML"),
    ("java", "Java"),
    ("idl", "Interface Definition Language"),
    ("xml", "XML"),
    ("xsl", "XML"),
    ("php", "PHP"),
    ("inc", "PHP include"),
    ("sh", "Shell Script"),
    ("ksh", "Shell Script"),
    ("bash", "Shell Script"),
    ("csh", "Shell Script"),
    ("tcsh", "Shell Script"),
    ("mk", "Makefile"),
    ("am", "Automake"),
    ("m4", "M4"),
    ("sql", "SQL"),
    // VB6
    ("frm", "VB6"),
    ("bas", "VB6"),
    ("cls", "VB6"),
    // .NET
    ("config", "config"),
    ("cs", "C#"),
    ("rc", "VS Resource"),
    ("xaml", "XAML file"),
    ("ps1", "Powershell"),
    // Web
    ("css", "CSS"),
    ("sass", "SASS"),
    ("scss", "SCSS"),
    ("js", "JavaScript"),
    ("json", "JSON"),
    ("asax", "ASP.NET handler"),
    ("ashx", "ASP.NET handler"),
    ("aspx", "ASP.NET page"),
    ("ascx", "ASP.NET user control"),
    ("cshtml", "MVC View Razor"),
    ("ts", "TypeScript"),
];

/// Case-insensitive path fragments marking vendored, minified or generated
/// files. Separators are written as `/`; paths are normalised to match.
pub const NAME_FRAGMENT_EXCLUSIONS: &[&str] = &[
    "ai.0.",
    "bootstrap.",
    "jquery.",
    "jquery-",
    "modernizr",
    ".min.js",
    ".min.css",
    "/Lib/",
    "/External/",
    "ASPxScriptIntelliSense.js",
    "jquery",
    "/packages/",
    "/node_modules/",
    "Silverlight.js",
    "/bower_components/",
    "/tmp/",
    "/temp/",
    ".git",
];

/// MIME types that mark a file as binary when guessed exactly.
pub const BINARY_MIME_TYPES: &[&str] = &["application/octet-stream", "application/pdf"];

/// MIME type fragments that mark a file as binary when contained in the guess.
pub const BINARY_MIME_TYPE_PARTS: &[&str] = &["application/vnd"];

/// Extension (lowercase) to guessed MIME type.
const MIME_TYPES: &[(&str, &str)] = &[
    ("a", "application/octet-stream"),
    ("bin", "application/octet-stream"),
    ("dll", "application/octet-stream"),
    ("exe", "application/octet-stream"),
    ("o", "application/octet-stream"),
    ("obj", "application/octet-stream"),
    ("so", "application/octet-stream"),
    ("pdf", "application/pdf"),
    ("apk", "application/vnd.android.package-archive"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
    ("odp", "application/vnd.oasis.opendocument.presentation"),
    ("rar", "application/vnd.rar"),
    ("vsd", "application/vnd.visio"),
    ("tar", "application/x-tar"),
    ("zip", "application/zip"),
    ("jar", "application/java-archive"),
    ("wasm", "application/wasm"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("bmp", "image/bmp"),
    ("ico", "image/vnd.microsoft.icon"),
    ("svg", "image/svg+xml"),
    ("eot", "application/vnd.ms-fontobject"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("css", "text/css"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("xml", "text/xml"),
    ("c", "text/plain"),
    ("h", "text/plain"),
    ("txt", "text/plain"),
    ("py", "text/x-python"),
    ("sh", "application/x-sh"),
    ("csh", "application/x-csh"),
    ("tcl", "application/x-tcl"),
];

/// Compression suffixes to the content encoding they imply.
const MIME_ENCODINGS: &[(&str, &str)] = &[
    ("gz", "gzip"),
    ("tgz", "gzip"),
    ("svgz", "gzip"),
    ("z", "compress"),
    ("bz2", "bzip2"),
    ("xz", "xz"),
    ("br", "br"),
];

/// A MIME guess from a file name: the type and the content encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MimeGuess {
    pub mime_type: Option<&'static str>,
    pub encoding: Option<&'static str>,
}

/// Look up the label for an extension (no leading dot).
pub fn label_for_extension(extension: &str) -> Option<&'static str> {
    EXTENSION_LABELS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, label)| *label)
}

/// Guess a MIME type and encoding from a file name.
///
/// A compression suffix yields the encoding, and the type comes from the
/// extension underneath it (`a.tar.gz` is `application/x-tar` + `gzip`).
/// `tgz` and `svgz` imply their inner type directly.
pub fn guess_mime(file_name: &str) -> MimeGuess {
    let lower = file_name.to_lowercase();
    let (rest, extension) = split_last_extension(&lower);

    let mut guess = MimeGuess::default();
    let extension = match extension
        .and_then(|ext| MIME_ENCODINGS.iter().find(|(e, _)| *e == ext))
    {
        Some((ext, encoding)) => {
            guess.encoding = Some(*encoding);
            match *ext {
                "tgz" => Some("tar"),
                "svgz" => Some("svg"),
                _ => split_last_extension(rest).1,
            }
        }
        None => extension,
    };
    guess.mime_type = extension.and_then(lookup_mime);

    guess
}

fn lookup_mime(extension: &str) -> Option<&'static str> {
    MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Split a file name at its last dot, ignoring leading dots.
///
/// `".bashrc"` has no extension; `"a."` has an empty one.
pub(crate) fn split_last_extension(file_name: &str) -> (&str, Option<&str>) {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].rfind('.') {
        Some(i) => {
            let dot = leading + i;
            (&file_name[..dot], Some(&file_name[dot + 1..]))
        }
        None => (file_name, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup() {
        assert_eq!(label_for_extension("py"), Some("Python"));
        assert_eq!(label_for_extension("hpp"), Some("C or C++ Header"));
        assert_eq!(label_for_extension("c++"), Some("C++"));
        assert_eq!(label_for_extension("C"), None);
        assert_eq!(label_for_extension("xyz"), None);
    }

    #[test]
    fn test_extension_table_has_no_duplicates() {
        for (i, (ext, _)) in EXTENSION_LABELS.iter().enumerate() {
            assert!(
                !EXTENSION_LABELS[i + 1..].iter().any(|(e, _)| e == ext),
                "duplicate extension {ext}"
            );
        }
    }

    #[test]
    fn test_split_last_extension() {
        assert_eq!(split_last_extension("main.c"), ("main", Some("c")));
        assert_eq!(split_last_extension("a.tar.gz"), ("a.tar", Some("gz")));
        assert_eq!(split_last_extension("Makefile"), ("Makefile", None));
        assert_eq!(split_last_extension(".bashrc"), (".bashrc", None));
        assert_eq!(split_last_extension("..hidden"), ("..hidden", None));
        assert_eq!(split_last_extension(".eslintrc.json"), (".eslintrc", Some("json")));
        assert_eq!(split_last_extension("trailing."), ("trailing", Some("")));
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("doc.pdf").mime_type, Some("application/pdf"));
        assert_eq!(guess_mime("LIB.SO").mime_type, Some("application/octet-stream"));
        assert_eq!(guess_mime("main.rs"), MimeGuess::default());
    }

    #[test]
    fn test_guess_mime_compressed() {
        let guess = guess_mime("release.tar.gz");
        assert_eq!(guess.mime_type, Some("application/x-tar"));
        assert_eq!(guess.encoding, Some("gzip"));

        let guess = guess_mime("data.gz");
        assert_eq!(guess.mime_type, None);
        assert_eq!(guess.encoding, Some("gzip"));

        let guess = guess_mime("logo.svgz");
        assert_eq!(guess.mime_type, Some("image/svg+xml"));
        assert_eq!(guess.encoding, Some("gzip"));

        assert_eq!(guess_mime("dump.sql.bz2").encoding, Some("bzip2"));
    }
}
