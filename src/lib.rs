extern crate byteorder;
extern crate log;
extern crate simplelog;
extern crate unchecked_index;

mod auxility;
mod error;
pub mod bwt;
pub mod ffi;
pub mod mtf;
pub mod suffix;

use byteorder::ByteOrder;
use byteorder::WriteBytesExt;
pub use self::error::Error;
use self::suffix::SuffixOrder;

/// Number of symbols in the fixed byte alphabet.
pub const NUM_SYMBOLS: usize = 256;

// the block header stores the first-rotation rank as a u32
const MAX_BLOCK_SIZE: usize = u32::MAX as usize;

/// Transform size info: source/target sizes.
#[repr(C)]
#[derive(Debug)]
pub struct Stat {
    pub source_size: u64,
    pub target_size: u64,
}

/// Apply the forward block transform to the whole source stream.
///
/// Output is a 32-bit big-endian first-rotation rank followed by the
/// transformed bytes; the payload length is implied by end of stream.
pub fn transform(source: &mut dyn std::io::Read, target: &mut dyn std::io::Write) -> std::io::Result<Stat> {
    let start_time = std::time::Instant::now();
    let mut sbvec = Vec::new();
    source.read_to_end(&mut sbvec)?;
    if sbvec.len() > MAX_BLOCK_SIZE {
        Err(Error::InvalidArgument("input too long for a 32-bit rotation rank"))?;
    }

    let order = SuffixOrder::new(&sbvec);
    let block = bwt::transform(&sbvec, &order)?;
    target.write_u32::<byteorder::BE>(block.first_index)?;
    target.write_all(&block.data)?;

    let statistics = Stat {
        source_size: sbvec.len() as u64,
        target_size: block.data.len() as u64 + 4,
    };
    log_throughput("transform", true, &statistics, start_time);
    return Ok(statistics);
}

/// Invert the block transform, consuming the exact format `transform` emits.
pub fn inverse(source: &mut dyn std::io::Read, target: &mut dyn std::io::Write) -> std::io::Result<Stat> {
    let start_time = std::time::Instant::now();
    let mut tbvec = Vec::new();
    source.read_to_end(&mut tbvec)?;
    if tbvec.len() < 4 {
        Err(Error::InvalidArgument("truncated block header"))?;
    }

    let first_index = byteorder::BE::read_u32(&tbvec[.. 4]);
    let sbvec = bwt::inverse(first_index, &tbvec[4 ..])?;
    target.write_all(&sbvec)?;

    let statistics = Stat {
        source_size: sbvec.len() as u64,
        target_size: tbvec.len() as u64,
    };
    log_throughput("inverse", false, &statistics, start_time);
    return Ok(statistics);
}

/// Apply move-to-front encoding to the whole source stream.
pub fn encode(source: &mut dyn std::io::Read, target: &mut dyn std::io::Write) -> std::io::Result<Stat> {
    let start_time = std::time::Instant::now();
    let mut sbvec = Vec::new();
    source.read_to_end(&mut sbvec)?;

    let ranks = mtf::encode(&sbvec);
    target.write_all(&ranks)?;

    let statistics = Stat {
        source_size: sbvec.len() as u64,
        target_size: ranks.len() as u64,
    };
    log_throughput("encode", true, &statistics, start_time);
    return Ok(statistics);
}

/// Apply move-to-front decoding to the whole source stream.
pub fn decode(source: &mut dyn std::io::Read, target: &mut dyn std::io::Write) -> std::io::Result<Stat> {
    let start_time = std::time::Instant::now();
    let mut tbvec = Vec::new();
    source.read_to_end(&mut tbvec)?;

    let symbols = mtf::decode(&tbvec)?;
    target.write_all(&symbols)?;

    let statistics = Stat {
        source_size: symbols.len() as u64,
        target_size: tbvec.len() as u64,
    };
    log_throughput("decode", false, &statistics, start_time);
    return Ok(statistics);
}

/// Run the full forward pipeline: block transform, then move-to-front over
/// the transformed stream (header included, it is all just bytes to MTF).
pub fn forward(source: &mut dyn std::io::Read, target: &mut dyn std::io::Write) -> std::io::Result<Stat> {
    let mut sbvec = Vec::new();
    source.read_to_end(&mut sbvec)?;

    let mut tbvec = Vec::with_capacity(sbvec.len() + 4);
    transform(&mut &sbvec[..], &mut tbvec)?;
    let encode_statistics = encode(&mut &tbvec[..], target)?;

    Ok(Stat {
        source_size: sbvec.len() as u64,
        target_size: encode_statistics.target_size,
    })
}

/// Run the full backward pipeline: move-to-front decoding, then the
/// inverse block transform.
pub fn backward(source: &mut dyn std::io::Read, target: &mut dyn std::io::Write) -> std::io::Result<Stat> {
    let mut tbvec = Vec::new();
    source.read_to_end(&mut tbvec)?;

    let mut mbvec = Vec::with_capacity(tbvec.len());
    decode(&mut &tbvec[..], &mut mbvec)?;
    let inverse_statistics = inverse(&mut &mbvec[..], target)?;

    Ok(Stat {
        source_size: inverse_statistics.source_size,
        target_size: tbvec.len() as u64,
    })
}

fn log_throughput(stage: &str, is_forward: bool, statistics: &Stat, start_time: std::time::Instant) {
    let duration = std::time::Instant::now().duration_since(start_time);
    let duration_secs = duration.as_secs() as f64 + duration.subsec_nanos() as f64 * 1e-9;
    let mbps = statistics.source_size as f64 * 1e-6 / duration_secs;

    if is_forward {
        log::info!("{}: {} bytes => {} bytes, {:.3}MB/s",
            stage, statistics.source_size, statistics.target_size, mbps);
    } else {
        log::info!("{}: {} bytes <= {} bytes, {:.3}MB/s",
            stage, statistics.source_size, statistics.target_size, mbps);
    }
}

#[macro_export]
macro_rules! assert_unchecked {
    ($cond:expr) => {
        if !$cond {
            if cfg!(debug_assertions) {
                panic!("Fatal error: assertion `{}` failed: this is a bug and a safety issue!", stringify!($cond));
            }
            unsafe {std::hint::unreachable_unchecked()};
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_transform_stream_format() {
        let mut source: &[u8] = b"ABRACADABRA!";
        let mut target = Vec::new();
        let statistics = transform(&mut source, &mut target).unwrap();

        assert_eq!(&target[.. 4], &[0, 0, 0, 3]);
        assert_eq!(&target[4 ..], b"ARD!RCAAAABB");
        assert_eq!(statistics.source_size, 12);
        assert_eq!(statistics.target_size, 16);
    }

    #[test]
    fn test_inverse_stream() {
        let mut source: &[u8] = &[0, 0, 0, 3, b'A', b'R', b'D', b'!', b'R', b'C', b'A', b'A', b'A', b'A', b'B', b'B'];
        let mut target = Vec::new();
        inverse(&mut source, &mut target).unwrap();
        assert_eq!(target, b"ABRACADABRA!");
    }

    #[test]
    fn test_inverse_rejects_truncated_header() {
        for header in [&b""[..], &b"\x00"[..], &b"\x00\x00\x00"[..]] {
            let mut source = header;
            let mut target = Vec::new();
            let err = inverse(&mut source, &mut target).unwrap_err();
            assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        }
    }

    #[test]
    fn test_inverse_rejects_bad_first_index() {
        let mut source: &[u8] = &[0, 0, 0, 3, b'a', b'b', b'c'];
        let mut target = Vec::new();
        let err = inverse(&mut source, &mut target).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_empty_round_trips() {
        let mut transformed = Vec::new();
        transform(&mut &b""[..], &mut transformed).unwrap();
        assert_eq!(transformed, [0, 0, 0, 0]);

        let mut recovered = Vec::new();
        inverse(&mut &transformed[..], &mut recovered).unwrap();
        assert!(recovered.is_empty());

        let mut ranks = Vec::new();
        encode(&mut &b""[..], &mut ranks).unwrap();
        assert!(ranks.is_empty());

        let mut symbols = Vec::new();
        decode(&mut &b""[..], &mut symbols).unwrap();
        assert!(symbols.is_empty());
    }

    #[test]
    fn test_forward_is_mtf_of_transform_stream() {
        let input = b"ABRACADABRA!";
        let mut transformed = Vec::new();
        transform(&mut &input[..], &mut transformed).unwrap();

        let mut piped = Vec::new();
        forward(&mut &input[..], &mut piped).unwrap();
        assert_eq!(piped, mtf::encode(&transformed));
    }

    #[test]
    fn test_forward_backward_round_trip() {
        let inputs: [&[u8]; 4] = [
            b"",
            b"A",
            b"ABRACADABRA!",
            b"she sells sea shells by the sea shore",
        ];
        for input in inputs {
            let mut piped = Vec::new();
            forward(&mut &input[..], &mut piped).unwrap();

            let mut recovered = Vec::new();
            backward(&mut &piped[..], &mut recovered).unwrap();
            assert_eq!(recovered, input);
        }
    }
}
