//! File entry points: extension checks, whole-file reads and writes.

use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use vcardio_core::CodecConfig;

use super::build::serialize_with;
use super::core::Card;
use super::error::{CardError, CardResult};
use super::parse::parse_file_with;
use crate::rfc::validation::validate_card;

fn has_card_extension(path: &Path, config: &CodecConfig) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| config.accepts_extension(ext))
}

/// Reads a whole card file into memory.
///
/// ## Errors
/// Returns an invalid-file error if the extension is not accepted, the file
/// cannot be read, or it is not UTF-8. Returns an `Other` error if the
/// buffer cannot be allocated.
#[tracing::instrument(skip(config), fields(path = %path.display()))]
pub fn read_all(path: &Path, config: &CodecConfig) -> CardResult<String> {
    if !has_card_extension(path, config) {
        tracing::warn!("Rejected card file extension");
        return Err(CardError::invalid_file(format!(
            "{} does not have a card file extension",
            path.display()
        )));
    }

    let mut file = File::open(path)
        .map_err(|e| CardError::invalid_file(format!("cannot open {}: {e}", path.display())))?;
    let size = file
        .metadata()
        .map_err(|e| CardError::invalid_file(format!("cannot stat {}: {e}", path.display())))?
        .len();
    let size = usize::try_from(size)
        .map_err(|_| CardError::other(format!("{} is too large to buffer", path.display())))?;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(size)
        .map_err(|e| CardError::other(format!("cannot allocate {size} bytes: {e}")))?;
    file.read_to_end(&mut bytes)
        .map_err(|e| CardError::invalid_file(format!("cannot read {}: {e}", path.display())))?;

    tracing::debug!(len = bytes.len(), "Read card file");

    String::from_utf8(bytes).map_err(|e| {
        CardError::invalid_file(format!("{} is not valid UTF-8: {e}", path.display()))
    })
}

/// Serializes a card and writes it to `path` using the default codec settings.
///
/// ## Errors
/// See [`write_file_with`].
pub fn write_file(path: impl AsRef<Path>, card: &Card) -> CardResult<()> {
    write_file_with(path, card, &CodecConfig::default())
}

/// Serializes a card and writes it to `path`.
///
/// The text is fully built before the file is created, so a card that cannot
/// be serialized leaves no file behind.
///
/// ## Errors
/// Returns a write error if the extension is not accepted, the card cannot
/// be serialized, or the file cannot be written.
#[tracing::instrument(skip(card, config), fields(path = %path.as_ref().display()))]
pub fn write_file_with(path: impl AsRef<Path>, card: &Card, config: &CodecConfig) -> CardResult<()> {
    let path = path.as_ref();
    if !has_card_extension(path, config) {
        tracing::warn!("Rejected card file extension");
        return Err(CardError::write(format!(
            "{} does not have a card file extension",
            path.display()
        )));
    }

    let text = serialize_with(card, config)?;
    std::fs::write(path, &text)
        .map_err(|e| CardError::write(format!("cannot write {}: {e}", path.display())))?;

    tracing::debug!(len = text.len(), "Wrote card file");
    Ok(())
}

/// Parses a card file and validates the result.
///
/// ## Errors
/// Returns the first read, parse, or validation error.
pub fn parse_and_validate_file(path: impl AsRef<Path>, config: &CodecConfig) -> CardResult<Card> {
    let card = parse_file_with(path, config)?;
    validate_card(&card)?;
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::Property;
    use crate::rfc::vcard::error::CardErrorKind;
    use crate::rfc::vcard::parse::parse_file;

    const CARD: &str = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane Doe\r\nTEL:555-0100\r\nEND:VCARD\r\n";

    #[test]
    fn read_rejects_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.txt");
        std::fs::write(&path, CARD).unwrap();

        let err = read_all(&path, &CodecConfig::default()).unwrap_err();
        assert_eq!(err.kind, CardErrorKind::InvalidFile);
    }

    #[test]
    fn read_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_all(&dir.path().join("absent.vcf"), &CodecConfig::default()).unwrap_err();
        assert_eq!(err.kind, CardErrorKind::InvalidFile);
    }

    #[test]
    fn read_rejects_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.vcf");
        std::fs::write(&path, [0x42, 0xff, 0xfe, 0x0d, 0x0a]).unwrap();

        let err = read_all(&path, &CodecConfig::default()).unwrap_err();
        assert_eq!(err.kind, CardErrorKind::InvalidFile);
    }

    #[test]
    fn read_accepts_configured_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.vcard");
        std::fs::write(&path, CARD).unwrap();
        assert_eq!(read_all(&path, &CodecConfig::default()).unwrap(), CARD);

        let custom = CodecConfig {
            extensions: vec!["txt".to_string()],
            ..CodecConfig::default()
        };
        let txt = dir.path().join("card.txt");
        std::fs::write(&txt, CARD).unwrap();
        assert!(read_all(&txt, &custom).is_ok());
        assert!(read_all(&path, &custom).is_err());
    }

    #[test_log::test]
    fn write_then_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.vcf");

        let mut card = Card::with_formatted_name("Jane Doe");
        card.add_property(Property::text("TEL", "555-0100"));
        write_file(&path, &card).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), CARD);
        assert!(parse_file(&path).unwrap().structurally_eq(&card));
    }

    #[test]
    fn write_rejects_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let err = write_file(&path, &Card::with_formatted_name("Jane")).unwrap_err();
        assert_eq!(err.kind, CardErrorKind::WriteError);
        assert!(!path.exists());
    }

    #[test]
    fn failed_serialization_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.vcf");

        let err = write_file(&path, &Card::new()).unwrap_err();
        assert_eq!(err.kind, CardErrorKind::WriteError);
        assert!(!path.exists());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.vcf");

        let err = write_file(&path, &Card::with_formatted_name("Jane")).unwrap_err();
        assert_eq!(err.kind, CardErrorKind::WriteError);
    }

    #[test]
    fn parse_and_validate_rejects_invalid_card() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.vcf");
        std::fs::write(
            &path,
            "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nUID:1\r\nUID:2\r\nEND:VCARD\r\n",
        )
        .unwrap();

        assert!(parse_file(&path).is_ok());
        let err = parse_and_validate_file(&path, &CodecConfig::default()).unwrap_err();
        assert_eq!(err.kind, CardErrorKind::InvalidProperty);
    }
}
