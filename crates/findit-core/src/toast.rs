//! Toast Messages

/// How long a toast stays up before auto-dismiss
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
            ToastKind::Info => "fas fa-info-circle",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success show",
            ToastKind::Error => "toast toast-error show",
            ToastKind::Info => "toast toast-info show",
        }
    }
}

/// One-line transient message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Info }
    }
}
