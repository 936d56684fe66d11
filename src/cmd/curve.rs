use crate::reports;
use clap::Args;
use msdcalc::api::{curve_rate, CURVE_LEN, CURVE_SCORE_GOAL};
use msdcalc::chart::loader::load_chart;
use msdcalc::config::CalcParams;
use msdcalc::error::CalcResult;
use msdcalc::Calc;

#[derive(Args, Debug, Clone)]
pub struct CurveArgs {
    /// Chart file (.json or .csv).
    pub chart: String,

    #[command(flatten)]
    pub params: CalcParams,
}

pub fn run(args: CurveArgs, params: CalcParams) -> CalcResult<()> {
    let chart = load_chart(&args.chart)?;
    let calc = Calc::new(params);

    let curve = calc.rate_curve(chart.as_slice());
    let rates: Vec<f32> = (0..CURVE_LEN).map(curve_rate).collect();

    println!(
        "\n📈 {} across {} rates, goal {:.2}%",
        args.chart,
        CURVE_LEN,
        CURVE_SCORE_GOAL * 100.0
    );
    reports::print_curve(&rates, &curve);
    Ok(())
}
