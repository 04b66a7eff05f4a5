use crate::config::Columns;

// ---------------------------------------------------------------------------
// ChartSpec – one experiment-vs-theory comparison
// ---------------------------------------------------------------------------

/// Which columns to plot and how to label the result.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub x_column: String,
    pub experiment_column: String,
    pub theory_column: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Output file name inside the output directory.
    pub filename: String,
    /// Metric lives in `[0, 1]` (probabilities, relative throughput): the
    /// y-axis is pinned to start at 0 and reach at least 1.1.
    pub unit_interval: bool,
}

const X_LABEL: &str = "Интенсивность потока заявок (λ), заявок/сек";

/// The five fixed comparisons, in render order (`p-1.png` … `p-5.png`).
pub fn standard_charts(columns: &Columns) -> Vec<ChartSpec> {
    let chart = |exp: &str, theory: &str, title: &str, y_label: &str, n: u8, unit: bool| {
        ChartSpec {
            x_column: columns.lambda.clone(),
            experiment_column: exp.to_string(),
            theory_column: theory.to_string(),
            title: title.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: y_label.to_string(),
            filename: format!("p-{n}.png"),
            unit_interval: unit,
        }
    };

    vec![
        chart(
            columns.p0_exp.as_str(),
            columns.p0_theory.as_str(),
            "Зависимость вероятности простоя системы (P0) от интенсивности потока (λ)",
            "Вероятность простоя (P0)",
            1,
            true,
        ),
        chart(
            columns.p_block_exp.as_str(),
            columns.p_block_theory.as_str(),
            "Зависимость вероятности отказа (Pотк) от интенсивности потока (λ)",
            "Вероятность отказа (Pотк)",
            2,
            true,
        ),
        chart(
            columns.q_exp.as_str(),
            columns.q_theory.as_str(),
            "Зависимость относительной пропускной способности (Q) от интенсивности потока (λ)",
            "Относительная пропускная способность (Q)",
            3,
            true,
        ),
        chart(
            columns.a_exp.as_str(),
            columns.a_theory.as_str(),
            "Зависимость абсолютной пропускной способности (A) от интенсивности потока (λ)",
            "Абсолютная пропускная способность (A), заявок/сек",
            4,
            false,
        ),
        chart(
            columns.k_exp.as_str(),
            columns.k_theory.as_str(),
            "Зависимость среднего числа занятых каналов (k) от интенсивности потока (λ)",
            "Среднее число занятых каналов (k)",
            5,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_charts_with_numbered_files() {
        let charts = standard_charts(&Columns::default());
        let files: Vec<&str> = charts.iter().map(|c| c.filename.as_str()).collect();
        assert_eq!(files, ["p-1.png", "p-2.png", "p-3.png", "p-4.png", "p-5.png"]);
        assert!(charts.iter().all(|c| c.x_column == "Lambda"));
    }

    #[test]
    fn only_probability_like_metrics_are_clamped() {
        let charts = standard_charts(&Columns::default());
        let clamped: Vec<bool> = charts.iter().map(|c| c.unit_interval).collect();
        assert_eq!(clamped, [true, true, true, false, false]);
    }

    #[test]
    fn pairs_experiment_with_matching_theory() {
        let charts = standard_charts(&Columns::default());
        for c in &charts {
            let metric = c.experiment_column.trim_end_matches("_Эксп");
            assert_eq!(c.theory_column, format!("{metric}_Теор"));
        }
    }
}
