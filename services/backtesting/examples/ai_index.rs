//! Backtest of a small AI-themed index

use snapfolio_backtesting::{
    BacktestEngine, EngineConfig, Holding, LookbackWindow, PeriodKey,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let holdings = vec![
        Holding::new("NVDA", "NVIDIA", 121.40).with_sector("Technology"),
        Holding::new("ISRG", "Intuitive Surgical", 480.10).with_sector("Healthcare"),
        Holding::new("MSFT", "Microsoft", 415.10).with_sector("Technology"),
        Holding::new("TMO", "Thermo Fisher", 560.30).with_sector("Healthcare"),
    ];

    let engine = BacktestEngine::new(EngineConfig::default().with_seed(42))?;
    let data = engine.generate(&holdings, "AI companies leading in healthcare innovation");

    println!("{:>4} {:>10} {:>10} {:>8} {:>7} {:>8} {:>8}", "", "Return%", "S&P%", "Alpha", "Beta", "MaxDD%", "Vol%");
    for key in PeriodKey::ALL {
        let r = &data.performance[key];
        println!(
            "{:>4} {:>10.2} {:>10.2} {:>8.2} {:>7.3} {:>8.2} {:>8.2}",
            key, r.portfolio_return, r.sp500_return, r.alpha, r.beta, r.max_drawdown, r.volatility
        );
    }

    let detail = engine.detailed(&data.historical, LookbackWindow::Y1);
    println!(
        "\n1Y detail: {} points, total {:.2}% vs S&P {:.2}%, max drawdown {:.2}%",
        detail.chart_data.len(),
        detail.total_return,
        detail.sp500_total_return,
        detail.max_drawdown
    );

    Ok(())
}
