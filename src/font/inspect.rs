use std::fs;
use std::io::Read;
use std::path::Path;
use font_kit::font::Font;
use ttf_parser::Face;

/// Basic identity read out of a font file
#[derive(Clone, Debug)]
pub struct FontInfo {
    /// Font family name
    pub family_name: String,
    /// PostScript name, when the font carries one
    pub postscript_name: Option<String>,
}

/// Check if a file is a valid TTF/OTF font file
pub fn is_valid_font_file(path: &Path) -> bool {
    if let Some(ext) = path.extension() {
        let ext = ext.to_str().unwrap_or("").to_lowercase();
        if ext == "ttf" || ext == "otf" {
            if let Ok(mut file) = fs::File::open(path) {
                let mut header = [0u8; 4];
                if file.read_exact(&mut header).is_ok() {
                    let is_valid_magic =
                        header == [0x00, 0x01, 0x00, 0x00] || // TTF
                        header == [0x4F, 0x54, 0x54, 0x4F];   // OTF

                    if is_valid_magic {
                        if let Ok(_face) = Face::parse(&fs::read(path).unwrap_or_default(), 0) {
                            return true;
                        }
                    }
                }
            }
        }
    }
    false
}

/// Read the family identity from a font file, if it parses
///
/// Inspection is reporting-only: a file that fails to parse is still handed
/// to the external converter, exactly once.
pub fn inspect(path: &Path) -> Option<FontInfo> {
    if !is_valid_font_file(path) {
        return None;
    }

    match Font::from_path(path, 0) {
        Ok(font) => {
            let family_name = font.family_name();
            if family_name.is_empty() {
                return None;
            }
            Some(FontInfo {
                family_name,
                postscript_name: font.postscript_name(),
            })
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn rejects_files_with_the_wrong_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        fs::write(&path, b"not a font").unwrap();
        assert!(!is_valid_font_file(&path));
    }

    #[test]
    fn rejects_font_named_files_with_bad_magic() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fake.ttf");
        fs::write(&path, b"garbage bytes").unwrap();
        assert!(!is_valid_font_file(&path));
        assert!(inspect(&path).is_none());
    }

    #[test]
    fn rejects_truncated_font_files() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stub.otf");
        // Correct magic, nothing else
        fs::write(&path, [0x4F, 0x54, 0x54, 0x4F]).unwrap();
        assert!(!is_valid_font_file(&path));
    }
}
