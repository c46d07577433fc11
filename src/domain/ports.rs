pub trait ConfigProvider {
    /// Target concentration of the final diluted solution, in g/L.
    fn recommended_concentration(&self) -> f64;
}
