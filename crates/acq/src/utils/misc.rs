use libm::erfc;

const SQRT_2PI: f64 = 2.5066282746310007;

/// Env variable to set the log level of the library (see env_logger)
pub const EGOBOX_LOG: &str = "EGOBOX_LOG";

/// Cumulative distribution function of Standard Normal at x
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Probability density function of Standard Normal at x
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}
