use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Header names of the simulation results file.
///
/// Every metric comes as an experiment/theory pair sharing the `Lambda`
/// column as the independent variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub lambda: String,

    pub p0_exp: String,
    pub p_block_exp: String,
    pub q_exp: String,
    pub a_exp: String,
    pub k_exp: String,

    pub p0_theory: String,
    pub p_block_theory: String,
    pub q_theory: String,
    pub a_theory: String,
    pub k_theory: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            lambda: "Lambda".into(),
            p0_exp: "P0_Эксп".into(),
            p_block_exp: "P_Отк_Эксп".into(),
            q_exp: "Q_Эксп".into(),
            a_exp: "A_Эксп".into(),
            k_exp: "k_Эксп".into(),
            p0_theory: "P0_Теор".into(),
            p_block_theory: "P_Отк_Теор".into(),
            q_theory: "Q_Теор".into(),
            a_theory: "A_Теор".into(),
            k_theory: "k_Теор".into(),
        }
    }
}

#[cfg(test)]
impl Columns {
    /// All column names in header order.
    pub fn all(&self) -> [&str; 11] {
        [
            &self.lambda,
            &self.p0_exp,
            &self.p_block_exp,
            &self.q_exp,
            &self.a_exp,
            &self.k_exp,
            &self.p0_theory,
            &self.p_block_theory,
            &self.q_theory,
            &self.a_theory,
            &self.k_theory,
        ]
    }
}

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything a run needs: where to read, where to write, how big to draw.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Semicolon-delimited simulation results.
    pub input_path: PathBuf,
    pub delimiter: u8,
    /// Created on demand (single level).
    pub output_dir: PathBuf,
    /// Figure size in pixels (10x6 inches at 100 dpi).
    pub figure_size: (u32, u32),
    pub columns: Columns,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("Lab08/simulation_results.csv"),
            delimiter: b';',
            output_dir: PathBuf::from("result"),
            figure_size: (1000, 600),
            columns: Columns::default(),
        }
    }
}
