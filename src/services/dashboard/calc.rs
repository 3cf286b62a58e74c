//! 统计计算
//!
//! 缺少 percentage 的作答按 0 分计入。

use serde_json::Number;

use crate::models::dashboard::responses::{
    DashboardStats, GradingStats, PerformanceDistribution, RecentActivity,
};
use crate::models::exams::entities::Exam;
use crate::models::students::entities::Student;
use crate::models::submissions::entities::{GradingStatus, Submission};
use crate::services::exams::scoring::js_round;

pub const PASS_THRESHOLD: f64 = 60.0;
pub const RECENT_ACTIVITY_LIMIT: usize = 10;
const NOT_AVAILABLE: &str = "N/A";

fn mean_percentage(submissions: &[Submission]) -> f64 {
    if submissions.is_empty() {
        return 0.0;
    }
    let total: f64 = submissions.iter().map(Submission::percentage_or_zero).sum();
    total / submissions.len() as f64
}

pub fn dashboard_stats(
    students: &[Student],
    exams: &[Exam],
    submissions: &[Submission],
) -> DashboardStats {
    DashboardStats {
        total_students: students.len(),
        total_exams: exams.len(),
        total_submissions: submissions.len(),
        active_exams: exams.iter().filter(|exam| exam.is_active()).count(),
        average_score: mean_percentage(submissions),
    }
}

pub fn performance_distribution(submissions: &[Submission]) -> PerformanceDistribution {
    let mut distribution = PerformanceDistribution::default();
    for percentage in submissions.iter().map(Submission::percentage_or_zero) {
        match percentage {
            p if p >= 80.0 => distribution.excellent += 1,
            p if p >= 70.0 => distribution.very_good += 1,
            p if p >= 60.0 => distribution.good += 1,
            p if p >= 50.0 => distribution.regular += 1,
            _ => distribution.insufficient += 1,
        }
    }
    distribution
}

fn recent_activity(mut submissions: Vec<Submission>) -> Vec<RecentActivity> {
    // ISO 时间字符串可直接按字典序比较，缺失时间的排在最后
    submissions.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    submissions
        .into_iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(|submission| RecentActivity {
            id: submission.id,
            student_name: submission
                .student_name
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            exam_title: submission
                .exam_title
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            percentage: submission.percentage.unwrap_or_else(|| Number::from(0)),
            submitted_at: submission.submitted_at,
        })
        .collect()
}

pub fn grading_stats(submissions: Vec<Submission>) -> GradingStats {
    let total = submissions.len();
    let count_status = |status: GradingStatus| {
        submissions
            .iter()
            .filter(|submission| submission.has_status(status))
            .count()
    };
    let graded_submissions = count_status(GradingStatus::Graded);
    let reviewed_submissions = count_status(GradingStatus::Reviewed);

    let pass_rate = if total == 0 {
        0
    } else {
        let passed = submissions
            .iter()
            .filter(|submission| submission.percentage_or_zero() >= PASS_THRESHOLD)
            .count();
        js_round(passed as f64 / total as f64 * 100.0)
    };

    GradingStats {
        total_submissions: total,
        graded_submissions,
        reviewed_submissions,
        average_score: js_round(mean_percentage(&submissions)),
        pass_rate,
        performance_distribution: performance_distribution(&submissions),
        recent_activity: recent_activity(submissions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn submission(id: &str, percentage: Value, status: &str, submitted_at: &str) -> Submission {
        serde_json::from_value(json!({
            "id": id,
            "percentage": percentage,
            "gradingStatus": status,
            "submittedAt": submitted_at
        }))
        .unwrap()
    }

    fn exam(id: &str, status: &str) -> Exam {
        serde_json::from_value(json!({"id": id, "title": "Prova", "status": status})).unwrap()
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let stats = dashboard_stats(&[], &[], &[]);
        assert_eq!(stats.total_submissions, 0);
        assert_eq!(stats.average_score, 0.0);
    }

    #[test]
    fn test_dashboard_stats_counts_active_exams() {
        let exams = vec![exam("e1", "Ativo"), exam("e2", "Rascunho"), exam("e3", "Ativo")];
        let submissions = vec![
            submission("s1", json!(50), "graded", "2024-01-01T00:00:00.000Z"),
            submission("s2", json!(75), "graded", "2024-01-02T00:00:00.000Z"),
        ];
        let stats = dashboard_stats(&[], &exams, &submissions);
        assert_eq!(stats.total_exams, 3);
        assert_eq!(stats.active_exams, 2);
        assert_eq!(stats.average_score, 62.5);
    }

    #[test]
    fn test_performance_bands() {
        let submissions: Vec<Submission> = [95, 80, 79, 70, 65, 60, 55, 10]
            .iter()
            .enumerate()
            .map(|(i, p)| {
                submission(&format!("s{i}"), json!(p), "graded", "2024-01-01T00:00:00.000Z")
            })
            .collect();
        let distribution = performance_distribution(&submissions);
        assert_eq!(
            distribution,
            PerformanceDistribution {
                excellent: 2,
                very_good: 2,
                good: 2,
                regular: 1,
                insufficient: 1,
            }
        );
    }

    #[test]
    fn test_grading_stats_rates_and_recent_order() {
        let submissions = vec![
            submission("old", json!(40), "graded", "2024-01-01T00:00:00.000Z"),
            submission("new", json!(90), "reviewed", "2024-03-01T00:00:00.000Z"),
            submission("mid", json!(61), "pending-review", "2024-02-01T00:00:00.000Z"),
        ];
        let stats = grading_stats(submissions);

        assert_eq!(stats.total_submissions, 3);
        assert_eq!(stats.graded_submissions, 1);
        assert_eq!(stats.reviewed_submissions, 1);
        // (40 + 90 + 61) / 3 = 63.67
        assert_eq!(stats.average_score, 64);
        // 2/3 通过
        assert_eq!(stats.pass_rate, 67);
        let order: Vec<&str> = stats.recent_activity.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(order, ["new", "mid", "old"]);
        assert_eq!(stats.recent_activity[0].student_name, "N/A");
    }

    #[test]
    fn test_recent_activity_is_capped() {
        let submissions: Vec<Submission> = (0..15)
            .map(|i| {
                let submitted_at = format!("2024-01-{:02}T00:00:00.000Z", i + 1);
                submission(&format!("s{i}"), json!(70), "graded", &submitted_at)
            })
            .collect();
        let stats = grading_stats(submissions);
        assert_eq!(stats.recent_activity.len(), RECENT_ACTIVITY_LIMIT);
        assert_eq!(stats.recent_activity[0].id, "s14");
    }
}
