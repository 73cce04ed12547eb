//! Closed label vocabularies for every instrument dimension.
//!
//! Each label dimension is a field-less enum with an explicit wire-format
//! string, so a typo'd label value cannot fragment a series or blow up
//! cardinality. `VALUES` lists every variant in declaration order; `index`
//! returns the variant's position in `VALUES` and is used to address the
//! per-series instrument handles materialized at registry construction.

/// Success/failure outcome shared by several counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
}

impl Outcome {
    pub const VALUES: [Outcome; 2] = [Outcome::Success, Outcome::Failed];

    pub fn from_success(success: bool) -> Self {
        if success {
            Outcome::Success
        } else {
            Outcome::Failed
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failed => "failed",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Accepted resume file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
}

impl FileType {
    pub const VALUES: [FileType; 2] = [FileType::Pdf, FileType::Docx];

    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// How a matching request was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Manual,
    Auto,
}

impl MatchSource {
    pub const VALUES: [MatchSource; 2] = [MatchSource::Manual, MatchSource::Auto];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchSource::Manual => "manual",
            MatchSource::Auto => "auto",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// AI agent service endpoints called by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentEndpoint {
    CompareBatch,
    ExtractResume,
    ExtractJd,
}

impl AgentEndpoint {
    pub const VALUES: [AgentEndpoint; 3] = [
        AgentEndpoint::CompareBatch,
        AgentEndpoint::ExtractResume,
        AgentEndpoint::ExtractJd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentEndpoint::CompareBatch => "compare-batch",
            AgentEndpoint::ExtractResume => "extract-resume",
            AgentEndpoint::ExtractJd => "extract-jd",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Candidate fit categories produced by the matching agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitCategory {
    BestFit,
    PartialFit,
    NotFit,
}

impl FitCategory {
    pub const VALUES: [FitCategory; 3] = [
        FitCategory::BestFit,
        FitCategory::PartialFit,
        FitCategory::NotFit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FitCategory::BestFit => "Best Fit",
            FitCategory::PartialFit => "Partial Fit",
            FitCategory::NotFit => "Not Fit",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// How a workflow was launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowType {
    Manual,
    Scheduled,
}

impl WorkflowType {
    pub const VALUES: [WorkflowType; 2] = [WorkflowType::Manual, WorkflowType::Scheduled];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowType::Manual => "manual",
            WorkflowType::Scheduled => "scheduled",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Terminal status of a workflow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Success,
    Failed,
    Partial,
}

impl WorkflowStatus {
    pub const VALUES: [WorkflowStatus; 3] = [
        WorkflowStatus::Success,
        WorkflowStatus::Failed,
        WorkflowStatus::Partial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowStatus::Success => "success",
            WorkflowStatus::Failed => "failed",
            WorkflowStatus::Partial => "partial",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Blob storage partitions tracked for usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Resumes,
    Other,
}

impl StorageKind {
    pub const VALUES: [StorageKind; 2] = [StorageKind::Resumes, StorageKind::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKind::Resumes => "resumes",
            StorageKind::Other => "other",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// File operations performed against blob storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Upload,
    Download,
    Delete,
}

impl FileOperation {
    pub const VALUES: [FileOperation; 3] = [
        FileOperation::Upload,
        FileOperation::Download,
        FileOperation::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FileOperation::Upload => "upload",
            FileOperation::Download => "download",
            FileOperation::Delete => "delete",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Logical document-store collections.
///
/// Wire strings are the actual collection names, so the metric labels line up
/// with what operators see in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Resume,
    JobDescription,
    ResumeResult,
    Users,
    AuditLogs,
    Files,
    WorkflowExecutions,
}

impl Collection {
    pub const VALUES: [Collection; 7] = [
        Collection::Resume,
        Collection::JobDescription,
        Collection::ResumeResult,
        Collection::Users,
        Collection::AuditLogs,
        Collection::Files,
        Collection::WorkflowExecutions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Resume => "resume",
            Collection::JobDescription => "JobDescription",
            Collection::ResumeResult => "resume_result",
            Collection::Users => "users",
            Collection::AuditLogs => "audit_logs",
            Collection::Files => "files",
            Collection::WorkflowExecutions => "workflow_executions",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Operation kinds issued against the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOperation {
    Find,
    Insert,
    Update,
    Delete,
}

impl DbOperation {
    pub const VALUES: [DbOperation; 4] = [
        DbOperation::Find,
        DbOperation::Insert,
        DbOperation::Update,
        DbOperation::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DbOperation::Find => "find",
            DbOperation::Insert => "insert",
            DbOperation::Update => "update",
            DbOperation::Delete => "delete",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Bounded bands for the matching batch-size label dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSizeBand {
    Single,
    Small,
    Medium,
    Large,
}

impl BatchSizeBand {
    pub const VALUES: [BatchSizeBand; 4] = [
        BatchSizeBand::Single,
        BatchSizeBand::Small,
        BatchSizeBand::Medium,
        BatchSizeBand::Large,
    ];

    pub fn from_count(batch_size: usize) -> Self {
        match batch_size {
            0 | 1 => BatchSizeBand::Single,
            2..=10 => BatchSizeBand::Small,
            11..=50 => BatchSizeBand::Medium,
            _ => BatchSizeBand::Large,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BatchSizeBand::Single => "1",
            BatchSizeBand::Small => "2-10",
            BatchSizeBand::Medium => "11-50",
            BatchSizeBand::Large => "51+",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Bounded bands for the workflow resume-count label dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeCountBand {
    UpToTen,
    UpToFifty,
    UpToHundred,
    OverHundred,
}

impl ResumeCountBand {
    pub const VALUES: [ResumeCountBand; 4] = [
        ResumeCountBand::UpToTen,
        ResumeCountBand::UpToFifty,
        ResumeCountBand::UpToHundred,
        ResumeCountBand::OverHundred,
    ];

    pub fn from_count(resume_count: usize) -> Self {
        match resume_count {
            0..=10 => ResumeCountBand::UpToTen,
            11..=50 => ResumeCountBand::UpToFifty,
            51..=100 => ResumeCountBand::UpToHundred,
            _ => ResumeCountBand::OverHundred,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResumeCountBand::UpToTen => "1-10",
            ResumeCountBand::UpToFifty => "11-50",
            ResumeCountBand::UpToHundred => "51-100",
            ResumeCountBand::OverHundred => "100+",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}
