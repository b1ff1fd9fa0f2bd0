use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// Opens `input` for reading. `stdin` reads standard input, `.gz` files are
/// decompressed on the fly.
///
/// ```
/// use std::io::BufRead;
/// let reader = quadview::reader("tests/result/accessions.txt").unwrap();
/// assert_eq!(reader.lines().count(), 4);
/// ```
pub fn reader(input: &str) -> std::io::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = std::fs::File::open(path).map_err(|why| {
            std::io::Error::new(
                why.kind(),
                format!("could not open {}: {}", path.display(), why),
            )
        })?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

/// Slurps the whole input into a string.
pub fn read_to_string(input: &str) -> std::io::Result<String> {
    let mut reader = reader(input)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

pub fn writer(output: &str) -> std::io::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        Box::new(BufWriter::new(std::fs::File::create(output)?))
    };

    Ok(writer)
}
