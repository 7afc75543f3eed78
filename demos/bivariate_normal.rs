use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use sensorimotor_info::data::{SensationActionPair, SensorimotorPath};
use sensorimotor_info::estimators::mutual_information::MutualInformation;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Correlated unit-variance normals; the random source is passed explicitly
    let r = 0.9;
    let n = 1000;
    let k = 20;
    let mut rng = StdRng::seed_from_u64(10);
    let normal = Normal::new(0.0, 1.0)?;

    let mut path = SensorimotorPath::with_capacity(n);
    for t in 1..=n as i64 {
        let x: f64 = normal.sample(&mut rng);
        let z: f64 = normal.sample(&mut rng);
        let y = r * x + (1.0 - r * r).sqrt() * z;
        path.push(SensationActionPair::new(vec![x], vec![y], t))?;
    }

    let analytic = -0.5 * (1.0 - r * r).ln();
    info!(k, n, "k/N = {}", k as f64 / n as f64);

    let estimate = MutualInformation::new().with_k(k).calculate(&path)?;
    println!("Correlation r = {r}");
    println!("Analytic mutual information:  {analytic:.4} nats");
    println!("KSG estimate:                 {estimate:.4} nats");
    Ok(())
}
