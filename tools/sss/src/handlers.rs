//! Command handlers.

use crate::args::{RecoverArgs, SplitArgs};
use anyhow::{bail, Context, Result};
use log::debug;
use rand::rngs::OsRng;
use secret_sharing::{
    errors::{GenerateError, ReconstructError},
    generate, reconstruct, SECRET_BYTES,
};
use std::{
    fs::File,
    io::{self, ErrorKind, Read, Write},
    path::PathBuf,
};

/// Reads up to 32 bytes of secret material, zero-padding shorter input.
///
/// Only the first 32 bytes are consumed; anything beyond them is left unread.
pub fn read_secret<R: Read>(reader: &mut R) -> io::Result<[u8; SECRET_BYTES]> {
    let mut secret = [0u8; SECRET_BYTES];
    let mut filled = 0;
    while filled < SECRET_BYTES {
        match reader.read(&mut secret[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        }
    }
    Ok(secret)
}

/// Splits the secret into share files inside the output directory.
pub fn run_split(args: SplitArgs) -> Result<()> {
    if args.secret_file.is_empty() {
        bail!("please supply a nonempty secret file name");
    }
    if args.output_dir.as_os_str().is_empty() {
        bail!("please supply a nonempty output directory name");
    }
    let secret = match args.secret_file.as_str() {
        "-" => read_secret(&mut io::stdin().lock())?,
        path => {
            let mut file = File::open(path).with_context(|| format!("unable to open {path}"))?;
            read_secret(&mut file)?
        }
    };
    let mut sinks = Vec::with_capacity(args.shares as usize);
    for index in 1..=args.shares {
        let path = args.output_dir.join(format!("share{index}"));
        debug!("writing share {index} to {}", path.display());
        let sink = File::create(&path).with_context(|| format!("unable to create {}", path.display()))?;
        sinks.push(sink);
    }
    generate(&secret, args.threshold, &mut sinks, &mut OsRng)?;
    Ok(())
}

/// Recovers the secret from the given share files and writes it to stdout.
pub fn run_recover(args: RecoverArgs) -> Result<()> {
    let share_files = match args.share_files.len() {
        0 => vec![PathBuf::from("share1"), PathBuf::from("share2")],
        1 => bail!("please supply at least two share files"),
        _ => args.share_files,
    };
    let mut sources = Vec::with_capacity(share_files.len());
    for path in &share_files {
        debug!("reading share from {}", path.display());
        let source = File::open(path).with_context(|| format!("unable to open {}", path.display()))?;
        sources.push(source);
    }
    let threshold = u32::try_from(sources.len()).context("too many share files")?;
    let secret = reconstruct(&mut sources, threshold)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&secret)?;
    stdout.flush()?;
    Ok(())
}

/// Maps an error to the process exit code; each failure class gets its own.
pub fn error_code(error: &anyhow::Error) -> u8 {
    for cause in error.chain() {
        if let Some(error) = cause.downcast_ref::<GenerateError>() {
            return match error {
                GenerateError::InvalidParameters => 2,
                GenerateError::Io(_) => 3,
                GenerateError::Encode(_) => 7,
            };
        }
        if let Some(error) = cause.downcast_ref::<ReconstructError>() {
            return match error {
                ReconstructError::Io(_) => 3,
                ReconstructError::CorruptShare(_) => 4,
                ReconstructError::DuplicateShare => 5,
                ReconstructError::InvalidThreshold => 6,
                ReconstructError::SecretOverflow | ReconstructError::Interpolation(_) => 7,
            };
        }
    }
    1
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{collections::HashSet, io::Cursor};
    use tempfile::tempdir;

    #[test]
    fn short_input_is_zero_padded() {
        let mut input = Cursor::new(vec![1u8, 2, 3]);
        let secret = read_secret(&mut input).unwrap();
        let mut expected = [0u8; SECRET_BYTES];
        expected[..3].copy_from_slice(&[1, 2, 3]);
        assert_eq!(secret, expected);
    }

    #[test]
    fn long_input_is_truncated() {
        let mut input = Cursor::new(vec![7u8; 100]);
        let secret = read_secret(&mut input).unwrap();
        assert_eq!(secret, [7u8; SECRET_BYTES]);
        assert_eq!(input.position(), SECRET_BYTES as u64);
    }

    #[test]
    fn split_then_recover_via_files() {
        let dir = tempdir().unwrap();
        let secret_path = dir.path().join("secret");
        std::fs::write(&secret_path, [0x42u8; SECRET_BYTES]).unwrap();

        let args = SplitArgs {
            secret_file: secret_path.to_string_lossy().into_owned(),
            output_dir: dir.path().to_path_buf(),
            threshold: 2,
            shares: 3,
        };
        run_split(args).unwrap();

        let mut sources = vec![
            File::open(dir.path().join("share2")).unwrap(),
            File::open(dir.path().join("share3")).unwrap(),
        ];
        let recovered = reconstruct(&mut sources, 2).unwrap();
        assert_eq!(recovered, [0x42u8; SECRET_BYTES]);
    }

    #[test]
    fn exit_codes_are_distinct_per_failure_class() {
        let errors = vec![
            anyhow::Error::new(GenerateError::InvalidParameters),
            anyhow::Error::new(GenerateError::Io(io::Error::new(ErrorKind::Other, "io"))),
            anyhow::Error::new(ReconstructError::CorruptShare(
                secret_sharing::errors::DecodeError::BadMagic,
            )),
            anyhow::Error::new(ReconstructError::DuplicateShare),
            anyhow::Error::new(ReconstructError::InvalidThreshold),
            anyhow::anyhow!("usage error"),
        ];
        let codes: HashSet<u8> = errors.iter().map(error_code).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
    }

    #[test]
    fn context_preserves_the_exit_code() {
        let error = anyhow::Error::new(ReconstructError::DuplicateShare).context("recovering");
        assert_eq!(error_code(&error), 5);
    }
}
