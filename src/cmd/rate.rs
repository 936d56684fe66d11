use crate::reports;
use clap::Args;
use msdcalc::chart::loader::load_chart;
use msdcalc::config::CalcParams;
use msdcalc::error::CalcResult;
use msdcalc::Calc;
use std::time::Instant;

#[derive(Args, Debug, Clone)]
pub struct RateArgs {
    /// Chart file (.json or .csv).
    pub chart: String,

    /// Playback rate multiplier.
    #[arg(short, long, default_value_t = 1.0)]
    pub rate: f32,

    /// Target accuracy in [0, 1].
    #[arg(short, long, default_value_t = 0.93)]
    pub goal: f32,

    #[command(flatten)]
    pub params: CalcParams,
}

pub fn run(args: RateArgs, params: CalcParams) -> CalcResult<()> {
    let chart = load_chart(&args.chart)?;
    let calc = Calc::new(params);

    let start = Instant::now();
    let rating = calc.rate_chart(chart.as_slice(), args.rate, args.goal);
    let elapsed = start.elapsed();

    println!(
        "\n🎯 {} ({} rows, {} taps) at {:.2}x, goal {:.2}%",
        args.chart,
        chart.len(),
        chart.total_taps(),
        args.rate,
        args.goal * 100.0
    );
    reports::print_rating(&rating);
    println!("⏱️  Rated in {:.1?}", elapsed);
    Ok(())
}
