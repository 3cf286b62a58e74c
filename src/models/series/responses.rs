use super::entities::Series;
use crate::models::students::entities::Student;
use crate::models::DataPayload;

pub type SeriesResponse = DataPayload<Series>;
pub type SeriesListResponse = DataPayload<Vec<Series>>;
pub type SeriesStudentsResponse = DataPayload<Vec<Student>>;
