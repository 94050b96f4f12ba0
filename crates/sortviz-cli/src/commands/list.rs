use anyhow::Result;

use sortviz_core::Algorithm;

pub fn run() -> Result<()> {
    println!(
        "{:<16} {:<16} {:<12} {:<12} {:<12} {:<10} {}",
        "KEY", "NAME", "BEST", "AVERAGE", "WORST", "SPACE", "STABLE"
    );

    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        println!(
            "{:<16} {:<16} {:<12} {:<12} {:<12} {:<10} {}",
            algorithm.key(),
            algorithm.name(),
            info.best.notation,
            info.average.notation,
            info.worst.notation,
            info.space.notation,
            if info.stable { "yes" } else { "no" }
        );
    }

    Ok(())
}
