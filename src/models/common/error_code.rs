/// 响应体中的数字错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    AuthFailed = 1003,
    NotFound = 1004,
    InternalServerError = 1005,

    // 账号
    AccountAlreadyExists = 2000,
    AccountEmailInvalid = 2001,
    AccountPasswordInvalid = 2002,

    // 学生
    StudentNotFound = 3000,
    StudentListInvalid = 3001,

    // 题库
    QuestionNotFound = 3100,
    QuestionFieldsMissing = 3101,

    // 评估与模拟考试
    ExamNotFound = 3200,
    ExamHasNoQuestions = 3201,
    ExamNotActive = 3202,
    ExamSessionMissing = 3203,
    SimuladoSettingsInvalid = 3204,
    SimuladoInsufficientQuestions = 3205,

    // 作答
    SubmissionNotFound = 3300,
    SubmissionIdsMissing = 3301,

    // 班级
    ClassNotFound = 3400,

    // 年级
    SeriesNotFound = 3500,
    SeriesFieldsMissing = 3501,
    SeriesCodeExists = 3502,
    SeriesHasStudents = 3503,

    // 考试应用
    ApplicationNotFound = 3600,
}
