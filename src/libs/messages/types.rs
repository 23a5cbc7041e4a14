#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuTitle,
    MenuListAll,
    MenuByUser,
    MenuStatistics,
    MenuCompleted,
    MenuPending,
    MenuSearch,
    MenuLeaderboard,
    MenuToggle,
    MenuTags,
    MenuReload,
    MenuQuit,
    PressEnterToReturn,
    Goodbye,

    // === TASK LISTING MESSAGES ===
    AllTasksHeader,
    CompletedTasksHeader,
    PendingTasksHeader,
    UserTasksHeader(String), // user label
    RemoteTasksHeader(u32),  // user id
    NoTasksFound,
    MoreTasks(usize), // hidden count
    SearchResults {
        count: usize,
        keywords: String,
    },
    TaskToggled(String), // task line

    // === AGGREGATE MESSAGES ===
    StatisticsHeader,
    LeaderboardHeader,
    NoUsers,
    TagsHeader,
    NoTagsDetected,

    // === LOADING MESSAGES ===
    LoadingData,
    DataLoaded {
        users: usize,
        tasks: usize,
    },
    DataReloaded,
    LoadFailed(String), // error message
    ActionFailed(String),
    Fatal(String),
    InvalidUserId(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleApi,
    ConfigModuleView,

    // === PROMPTS ===
    PromptSelectOption,
    PromptUserId,
    PromptKeywords,
    PromptTaskId,
    PromptApiUrl,
    PromptTimeout,
    PromptUseCache,
    PromptListLimit,
}
