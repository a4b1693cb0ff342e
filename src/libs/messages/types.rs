#[derive(Debug, Clone)]
pub enum Message {
    // === REPORT MESSAGES ===
    ReportHeader(u32), // n_days

    // === COMPLETED TASK MESSAGES ===
    CompletedHeader(u32),               // n_days
    CompletedTotal(usize),              // count
    CompletedByProject,
    CompletedProjectCount(String, usize), // project name, count
    NoProject,
    CompletedListHeader,
    CompletedItem(String, String), // content, completed_at

    // === ACTIVE TASK MESSAGES ===
    NoActiveTasks,
    OverdueTotal(usize), // count
    OverdueListHeader,
    OverdueItem(String, String), // content, due date
    DueSoonTotal(u32, usize),    // lookahead days, count
    DueSoonListHeader,
    DueSoonItem(String, String), // content, due date

    // === PRODUCTIVITY MESSAGES ===
    Recommendation,
    RecommendationNoTasks,

    // === CONVERSATION MESSAGES ===
    Greeting,
    Help,
    PromptDays,
    PromptDaysManual,
    InvalidDays,
    PromptProject,
    InvalidProject,
    PromptLabel,
    InvalidLabel,
    ReportFailed,
    UnknownInput,
    DaysOption(u32), // days
    EnterManually,
    ChatStarted,
    ChatPrompt,
    ChatFinished,

    // === LISTING MESSAGES ===
    ProjectsTitle,
    LabelsTitle,
    NothingFound,

    // === CONFIGURATION MESSAGES ===
    InvalidConfigValue(String, String), // variable, value

    // === REMOTE DATA MESSAGES ===
    RecordSkipped(String, String),         // record id, reason
    RecordDecodeFailed(&'static str, String), // resource kind, error
    ReportFailedWithError(String),         // error
}
