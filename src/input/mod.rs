//! Input acquisition: resolving a source into in-memory 32-bit module words

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use byteorder::{NativeEndian, ReadBytesExt};

use crate::{ModvalError, ModvalResult};

/// Size of one module word in bytes
pub const WORD_SIZE: usize = 4;

/// Where the module binary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read the module from standard input
    Stdin,
    /// Read the module from a file
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("-"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the whole source into a sequence of host-order 32-bit words.
///
/// The content is read fully or the run aborts; nothing downstream ever
/// sees a partial result.
pub fn read_words(source: &InputSource) -> ModvalResult<Vec<u32>> {
    let bytes = match source {
        InputSource::File(path) => fs::read(path)?,
        InputSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    words_from_bytes(&bytes)
}

/// Decode raw bytes into host-order words. A length that is not a multiple
/// of the word size is rejected rather than silently truncated.
pub fn words_from_bytes(bytes: &[u8]) -> ModvalResult<Vec<u32>> {
    if bytes.len() % WORD_SIZE != 0 {
        return Err(ModvalError::TruncatedWord(bytes.len()));
    }
    let mut words = vec![0u32; bytes.len() / WORD_SIZE];
    let mut reader = bytes;
    reader.read_u32_into::<NativeEndian>(&mut words)?;
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn decodes_host_order_words() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let words = words_from_bytes(&bytes).unwrap();
        assert_eq!(
            words,
            vec![
                u32::from_ne_bytes([1, 2, 3, 4]),
                u32::from_ne_bytes([5, 6, 7, 8]),
            ]
        );
    }

    #[test]
    fn empty_input_yields_zero_words() {
        assert_eq!(words_from_bytes(&[]).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn unaligned_length_is_rejected() {
        let result = words_from_bytes(&[1, 2, 3]);
        assert!(matches!(result, Err(ModvalError::TruncatedWord(3))));
    }

    #[test]
    fn reads_words_from_a_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xAA, 0xBB, 0xCC, 0xDD]).unwrap();
        file.flush().unwrap();

        let source = InputSource::File(file.path().to_path_buf());
        let words = read_words(&source).unwrap();
        assert_eq!(words, vec![u32::from_ne_bytes([0xAA, 0xBB, 0xCC, 0xDD])]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = InputSource::File(PathBuf::from("no-such-module.bin"));
        assert!(matches!(read_words(&source), Err(ModvalError::Io(_))));
    }

    #[test]
    fn sources_display_as_command_line_spellings() {
        assert_eq!(InputSource::Stdin.to_string(), "-");
        assert_eq!(
            InputSource::File(PathBuf::from("module.bin")).to_string(),
            "module.bin"
        );
    }
}
