// crates/infra/src/filesystem.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use letter_tally_ports::decoding::{ByteRendering, DecodePlan, DecodedFileDto, LineDecoder};
use letter_tally_shared_kernel::{InfrastructureError, Result};

use crate::rendering::render_bytes;

/// Filesystem adapter implementing the `LineDecoder` port.
///
/// Reads each planned file line by line through a buffered reader, so the
/// handle is dropped on every exit path once the file's lines are consumed.
#[derive(Debug, Default)]
pub struct FsLineDecoder;

impl FsLineDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl LineDecoder for FsLineDecoder {
    fn decode(&self, plan: &DecodePlan) -> Result<Vec<DecodedFileDto>> {
        plan.paths
            .iter()
            .map(|path| decode_file(path, plan.rendering))
            .collect()
    }
}

fn decode_file(path: &Path, rendering: ByteRendering) -> Result<DecodedFileDto> {
    let file = File::open(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut text = String::new();
    let mut lines = 0usize;
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let bytes = decode_line(&line).map_err(|err| InfrastructureError::Base64Decode {
            path: path.to_path_buf(),
            line: index + 1,
            details: err.to_string(),
        })?;
        text.push_str(&render_bytes(&bytes, rendering));
        lines = index + 1;
    }

    log::debug!("decoded {lines} line(s) from {}", path.display());
    Ok(DecodedFileDto { path: path.to_path_buf(), text, lines })
}

// The line iterator already consumed the terminator; embedded ASCII
// whitespace (e.g. a stray carriage return) is stripped before decoding.
fn decode_line(line: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    if line.bytes().any(|b| b.is_ascii_whitespace()) {
        let packed: Vec<u8> = line.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
        STANDARD.decode(&packed)
    } else {
        STANDARD.decode(line)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use letter_tally_shared_kernel::LetterTallyError;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    fn decode_one(contents: &str, rendering: ByteRendering) -> Result<DecodedFileDto> {
        let file = write_temp(contents);
        let plan = DecodePlan { paths: vec![file.path().to_path_buf()], rendering };
        FsLineDecoder::new()
            .decode(&plan)
            .map(|mut dtos| dtos.remove(0))
    }

    #[test]
    fn decodes_each_line_and_concatenates_reprs() {
        // "ab" and "cd", one blob per line
        let dto = decode_one("YWI=\nY2Q=\n", ByteRendering::Repr).unwrap();
        assert_eq!(dto.text, "b'ab'b'cd'");
        assert_eq!(dto.lines, 2);
    }

    #[test]
    fn text_rendering_drops_the_wrapper() {
        let dto = decode_one("YWI=\nY2Q=\n", ByteRendering::Text).unwrap();
        assert_eq!(dto.text, "abcd");
    }

    #[test]
    fn empty_file_contributes_empty_text() {
        let dto = decode_one("", ByteRendering::Repr).unwrap();
        assert_eq!(dto.text, "");
        assert_eq!(dto.lines, 0);
    }

    #[test]
    fn crlf_terminators_are_tolerated() {
        let dto = decode_one("YWI=\r\nY2Q=\r\n", ByteRendering::Text).unwrap();
        assert_eq!(dto.text, "abcd");
    }

    #[test]
    fn invalid_base64_reports_path_and_line() {
        let err = decode_one("YWI=\nnot base64!\n", ByteRendering::Repr).unwrap_err();
        match err {
            LetterTallyError::Infrastructure(InfrastructureError::Base64Decode {
                line, ..
            }) => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let plan = DecodePlan {
            paths: vec!["no/such/file.txt".into()],
            rendering: ByteRendering::Repr,
        };
        let err = FsLineDecoder::new().decode(&plan).unwrap_err();
        assert!(matches!(
            err,
            LetterTallyError::Infrastructure(InfrastructureError::FileRead { .. })
        ));
    }

    #[test]
    fn files_decode_independently_in_plan_order() {
        let first = write_temp("YWI=\n");
        let second = write_temp("Y2Q=\n");
        let plan = DecodePlan {
            paths: vec![first.path().to_path_buf(), second.path().to_path_buf()],
            rendering: ByteRendering::Repr,
        };
        let dtos = FsLineDecoder::new().decode(&plan).unwrap();
        assert_eq!(dtos[0].text, "b'ab'");
        assert_eq!(dtos[1].text, "b'cd'");
    }

    #[test]
    fn decoded_newline_bytes_stay_escaped_in_repr() {
        // "hi\n" encodes to aGkK
        let dto = decode_one("aGkK\n", ByteRendering::Repr).unwrap();
        assert_eq!(dto.text, "b'hi\\n'");
    }
}
