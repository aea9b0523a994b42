mod opt;

use clap::Parser;
use opt::Opt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let start_time = std::time::Instant::now();
    let args = Opt::parse();

    let statistics = match &args {
        Opt::Transform(stream) => {
            bwz::transform(&mut stream.get_ifile()?, &mut stream.get_ofile()?)
                .or_else(|e| Err(format!("transform failed: {}", e)))?
        }
        Opt::Inverse(stream) => {
            bwz::inverse(&mut stream.get_ifile()?, &mut stream.get_ofile()?)
                .or_else(|e| Err(format!("inverse failed: {}", e)))?
        }
        Opt::Encode(stream) => {
            bwz::encode(&mut stream.get_ifile()?, &mut stream.get_ofile()?)
                .or_else(|e| Err(format!("encoding failed: {}", e)))?
        }
        Opt::Decode(stream) => {
            bwz::decode(&mut stream.get_ifile()?, &mut stream.get_ofile()?)
                .or_else(|e| Err(format!("decoding failed: {}", e)))?
        }
        Opt::Forward(stream) => {
            bwz::forward(&mut stream.get_ifile()?, &mut stream.get_ofile()?)
                .or_else(|e| Err(format!("forward pipeline failed: {}", e)))?
        }
        Opt::Backward(stream) => {
            bwz::backward(&mut stream.get_ifile()?, &mut stream.get_ofile()?)
                .or_else(|e| Err(format!("backward pipeline failed: {}", e)))?
        }
    };

    // dump statistics
    let duration = std::time::Instant::now().duration_since(start_time);
    let duration_secs = duration.as_secs() as f64 + duration.subsec_nanos() as f64 * 1e-9;
    eprintln!("statistics:");
    eprintln!("  size:  {0} bytes {2} {1} bytes",
        statistics.source_size,
        statistics.target_size,
        match &args {
            Opt::Transform(..) | Opt::Encode(..) | Opt::Forward(..) => "=>",
            Opt::Inverse(..) | Opt::Decode(..) | Opt::Backward(..) => "<=",
        });
    eprintln!("  time:  {:.3} sec", duration_secs);
    Ok(())
}
