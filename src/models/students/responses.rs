use serde::Serialize;

use super::entities::Student;

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct StudentsCreatedResponse {
    pub students: Vec<Student>,
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: Student,
}
