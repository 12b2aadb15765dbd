/// Correlation Comparison Demo
///
/// Sweeps the particle Reynolds number over 1..=50 on a single reused
/// droplet and tabulates the drag coefficient predicted by each
/// correlation, demonstrating how the models diverge as inertia grows.
///
/// Advisories (correlations evaluated outside their validity range) are
/// logged to stderr at WARN.

use droplet_drag::{Correlation, Droplet};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    println!("=== Droplet Drag Correlation Comparison ===\n");

    let mut droplet = Droplet::default();
    println!(
        "Droplet: viscosity = {:.4e} Pa·s, gamma = {:.3}\n",
        droplet.viscosity(),
        droplet.gamma()
    );

    print!("{:>6} |", "Rep");
    for correlation in Correlation::ALL {
        print!(" {:>26} |", correlation.to_string());
    }
    println!();
    println!("{}", "-".repeat(8 + 30 * Correlation::ALL.len()));

    for rep in 1..=50 {
        droplet.set_rep(rep as f64);
        print!("{rep:>6} |");
        for correlation in Correlation::ALL {
            match droplet.evaluate(correlation) {
                Ok(cd) => print!(" {cd:>26.4} |"),
                Err(_) => print!(" {:>26} |", "n/a"),
            }
        }
        println!();
    }

    println!("\nNote: Hadamard-Rybczynski is a creeping-flow correlation and is");
    println!("extrapolated well outside its range here; see the WARN output.");
}
