//! Classification metrics over integer class labels
//!
//! Classes are the sorted union of the labels seen in `y_true` and `y_pred`.
//! Precision or recall of a class with no predicted or no true samples is
//! ill-defined; it is reported as 0.0 and logged with a warning.

use ndarray::Array2;
use tracing::warn;

use crate::error::{NetError, Result};

/// Result of [`classify`]
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationMetrics {
    /// Unweighted mean of per-class precision
    pub precision_macro: f64,
    /// Unweighted mean of per-class recall
    pub recall_macro: f64,
    pub accuracy: f64,
    /// Text table with per-class precision, recall, f1-score and support
    pub report: String,
    /// Rows are true classes, columns predicted classes, both indexed by `labels`
    pub confusion_matrix: Array2<usize>,
    pub labels: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
struct ClassScores {
    precision: f64,
    recall: f64,
    f1: f64,
    support: usize,
}

pub fn classify(y_true: &[usize], y_pred: &[usize]) -> Result<ClassificationMetrics> {
    if y_true.len() != y_pred.len() {
        return Err(NetError::LengthMismatch {
            inputs: y_pred.len(),
            labels: y_true.len(),
        });
    }
    if y_true.is_empty() {
        return Err(NetError::EmptyDataset);
    }

    let labels = label_set(y_true, y_pred);
    let confusion_matrix = confusion_matrix(y_true, y_pred, &labels);
    let scores = class_scores(&confusion_matrix, &labels);

    let n_classes = labels.len() as f64;
    let precision_macro = scores.iter().map(|s| s.precision).sum::<f64>() / n_classes;
    let recall_macro = scores.iter().map(|s| s.recall).sum::<f64>() / n_classes;

    let correct = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    let accuracy = correct as f64 / y_true.len() as f64;

    let report = format_report(&labels, &scores, accuracy);

    Ok(ClassificationMetrics {
        precision_macro,
        recall_macro,
        accuracy,
        report,
        confusion_matrix,
        labels,
    })
}

fn label_set(y_true: &[usize], y_pred: &[usize]) -> Vec<usize> {
    let mut labels: Vec<usize> = y_true.iter().chain(y_pred).copied().collect();
    labels.sort_unstable();
    labels.dedup();
    labels
}

fn confusion_matrix(y_true: &[usize], y_pred: &[usize], labels: &[usize]) -> Array2<usize> {
    let mut matrix = Array2::zeros((labels.len(), labels.len()));

    for (t, p) in y_true.iter().zip(y_pred) {
        // both are members of `labels` by construction
        if let (Ok(row), Ok(col)) = (labels.binary_search(t), labels.binary_search(p)) {
            matrix[[row, col]] += 1;
        }
    }

    matrix
}

fn class_scores(matrix: &Array2<usize>, labels: &[usize]) -> Vec<ClassScores> {
    labels
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let tp = matrix[[i, i]];
            let predicted = matrix.column(i).sum();
            let support = matrix.row(i).sum();

            let precision = if predicted == 0 {
                warn!(label = label, "precision is ill-defined: no samples predicted for this class");
                0.0
            } else {
                tp as f64 / predicted as f64
            };
            let recall = if support == 0 {
                warn!(label = label, "recall is ill-defined: no true samples for this class");
                0.0
            } else {
                tp as f64 / support as f64
            };
            let f1 = if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };

            ClassScores {
                precision,
                recall,
                f1,
                support,
            }
        })
        .collect()
}

fn format_report(labels: &[usize], scores: &[ClassScores], accuracy: f64) -> String {
    const HEADERS: [&str; 4] = ["precision", "recall", "f1-score", "support"];
    const WEIGHTED: &str = "weighted avg";

    let names: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
    let width = names.iter().map(String::len).max().unwrap_or(0).max(WEIGHTED.len());
    let total: usize = scores.iter().map(|s| s.support).sum();

    let row = |name: &str, p: f64, r: f64, f: f64, support: usize| {
        format!(
            "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}\n",
            name,
            p,
            r,
            f,
            support,
            width = width
        )
    };

    let mut report = format!("{:>width$} ", "", width = width);
    for header in HEADERS {
        report.push_str(&format!(" {:>9}", header));
    }
    report.push_str("\n\n");

    for (name, s) in names.iter().zip(scores) {
        report.push_str(&row(name, s.precision, s.recall, s.f1, s.support));
    }
    report.push('\n');

    report.push_str(&format!(
        "{:>width$}  {:>9} {:>9} {:>9.2} {:>9}\n",
        "accuracy",
        "",
        "",
        accuracy,
        total,
        width = width
    ));

    let n = scores.len() as f64;
    let mean = |f: fn(&ClassScores) -> f64| scores.iter().map(f).sum::<f64>() / n;
    report.push_str(&row(
        "macro avg",
        mean(|s| s.precision),
        mean(|s| s.recall),
        mean(|s| s.f1),
        total,
    ));

    let weighted = |f: fn(&ClassScores) -> f64| {
        if total == 0 {
            0.0
        } else {
            scores.iter().map(|s| f(s) * s.support as f64).sum::<f64>() / total as f64
        }
    };
    report.push_str(&row(
        WEIGHTED,
        weighted(|s| s.precision),
        weighted(|s| s.recall),
        weighted(|s| s.f1),
        total,
    ));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_perfect_predictions() {
        let y = [0, 1, 2, 1];
        let metrics = classify(&y, &y).unwrap();

        assert_eq!(metrics.accuracy, 1.0);
        assert_eq!(metrics.precision_macro, 1.0);
        assert_eq!(metrics.recall_macro, 1.0);
        assert_eq!(metrics.labels, vec![0, 1, 2]);
        assert_eq!(metrics.confusion_matrix, array![[1usize, 0, 0], [0, 2, 0], [0, 0, 1]]);
    }

    #[test]
    fn test_confusion_matrix_orientation() {
        // one sample of class 0 predicted as class 1
        let metrics = classify(&[0, 0, 1], &[0, 1, 1]).unwrap();

        assert_eq!(metrics.confusion_matrix, array![[1usize, 1], [0, 1]]);
        // class 0: p = 1/1, r = 1/2; class 1: p = 1/2, r = 1/1
        assert!((metrics.precision_macro - 0.75).abs() < 1e-12);
        assert!((metrics.recall_macro - 0.75).abs() < 1e-12);
        assert!((metrics.accuracy - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_class_never_predicted_has_zero_precision() {
        let metrics = classify(&[0, 1, 1, 1], &[1, 1, 1, 1]).unwrap();

        // class 0: precision ill-defined -> 0, recall 0; class 1: p = 3/4, r = 1
        assert!((metrics.precision_macro - 0.375).abs() < 1e-12);
        assert!((metrics.recall_macro - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_predicted_only_label_is_included() {
        let metrics = classify(&[0, 0], &[0, 3]).unwrap();

        assert_eq!(metrics.labels, vec![0, 3]);
        assert_eq!(metrics.confusion_matrix.dim(), (2, 2));
        assert_eq!(metrics.confusion_matrix[[0, 1]], 1);
    }

    #[test]
    fn test_report_layout() {
        let metrics = classify(&[0, 0, 1, 1], &[0, 1, 1, 1]).unwrap();
        let lines: Vec<&str> = metrics.report.lines().collect();

        assert!(lines[0].contains("precision"));
        assert!(lines[0].contains("f1-score"));
        assert!(lines[0].ends_with("support"));
        assert_eq!(lines[1], "");
        assert!(lines[2].trim_start().starts_with('0'));
        assert!(lines[2].contains("1.00"));
        assert!(metrics.report.contains("accuracy"));
        assert!(metrics.report.contains("0.75"));
        assert!(metrics.report.contains("macro avg"));
        assert!(metrics.report.contains("weighted avg"));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(classify(&[], &[]), Err(NetError::EmptyDataset));
        assert_eq!(
            classify(&[0, 1], &[0]),
            Err(NetError::LengthMismatch { inputs: 1, labels: 2 })
        );
    }
}
