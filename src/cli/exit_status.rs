use std::process::ExitCode;

/// Process exit status of an icon-purge run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command did what it was asked to.
    Success,
    /// The command ran but refused to act (e.g. `init` over an existing file).
    Failure,
    /// The run aborted: bad configuration, unreadable stylesheet, failed subsetting.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
