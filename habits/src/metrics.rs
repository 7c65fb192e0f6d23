/// Offline quality summary of one trained model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMetrics {
    pub name: &'static str,
    pub r2: f64,
    pub mae: f64,
    pub mse: f64,
    pub rmse: f64,
}

impl ModelMetrics {
    /// R² as a percentage, e.g. `18.8` for `0.188`.
    pub fn r2_percent(&self) -> f64 {
        self.r2 * 100.0
    }
}

pub const LINEAR_REGRESSION: ModelMetrics = ModelMetrics {
    name: "Linear Regression",
    r2: 0.188,
    mae: 0.667,
    mse: 0.519,
    rmse: 0.72,
};

pub const RANDOM_FOREST: ModelMetrics = ModelMetrics {
    name: "Random Forest",
    r2: 0.354,
    mae: 0.478,
    mse: 0.413,
    rmse: 0.642,
};

pub const ALL: [ModelMetrics; 2] = [LINEAR_REGRESSION, RANDOM_FOREST];
