use serde::Serialize;
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub total_exams: usize,
    pub total_submissions: usize,
    pub active_exams: usize,
    // 未取整的平均百分比
    pub average_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDistribution {
    pub excellent: usize,
    pub very_good: usize,
    pub good: usize,
    pub regular: usize,
    pub insufficient: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: String,
    pub student_name: String,
    pub exam_title: String,
    pub percentage: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingStats {
    pub total_submissions: usize,
    pub graded_submissions: usize,
    pub reviewed_submissions: usize,
    pub average_score: i64,
    pub pass_rate: i64,
    pub performance_distribution: PerformanceDistribution,
    pub recent_activity: Vec<RecentActivity>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse<T: Serialize> {
    pub stats: T,
}
