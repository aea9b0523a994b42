use clap::{Args, Parser};
use either::Either;
use std::fs::File;
use std::io::{self, Error, ErrorKind, Result, Stdin, Stdout};
use std::path::{Path, PathBuf};

pub type IStream = Either<File, Stdin>;
pub type OStream = Either<File, Stdout>;

#[derive(Parser, Debug)]
#[clap(name = "bwz", version, about = "a Burrows-Wheeler block transform pipeline")]
pub enum Opt {
    #[clap(about = "Apply the block transform")]
    Transform(StreamArgs),

    #[clap(about = "Invert the block transform")]
    Inverse(StreamArgs),

    #[clap(about = "Apply move-to-front encoding")]
    Encode(StreamArgs),

    #[clap(about = "Apply move-to-front decoding")]
    Decode(StreamArgs),

    #[clap(about = "Apply the block transform, then move-to-front")]
    Forward(StreamArgs),

    #[clap(about = "Invert move-to-front, then the block transform")]
    Backward(StreamArgs),
}

#[derive(Args, Debug)]
pub struct StreamArgs {
    #[clap(help = "Input filename, default to stdin", parse(from_os_str))]
    ipath: Option<PathBuf>,

    #[clap(help = "Output filename, default to stdout", parse(from_os_str))]
    opath: Option<PathBuf>,
}

impl StreamArgs {
    pub fn get_ifile(&self) -> Result<IStream> {
        get_ifile(self.ipath.as_ref())
    }

    pub fn get_ofile(&self) -> Result<OStream> {
        get_ofile(self.opath.as_ref())
    }
}

fn get_ifile<T: AsRef<Path>>(path: Option<T>) -> Result<IStream> {
    match path {
        None => {
            if unsafe { libc::isatty(0) } != 0 {
                return Err(Error::new(
                    ErrorKind::Other,
                    "Binary data cannot be read from terminal",
                ));
            }

            Ok(Either::Right(io::stdin()))
        }
        Some(ref path) => File::open(path).map(Either::Left),
    }
}

fn get_ofile<T: AsRef<Path>>(path: Option<T>) -> Result<OStream> {
    match path {
        None => {
            if unsafe { libc::isatty(1) } != 0 {
                return Err(Error::new(
                    ErrorKind::Other,
                    "Binary data cannot be written to terminal",
                ));
            }

            Ok(Either::Right(io::stdout()))
        }
        Some(ref path) => File::create(path).map(Either::Left),
    }
}
