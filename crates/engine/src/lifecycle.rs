use anyhow::{anyhow, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowState {
    Created,
    Running,
    Closing,
    Closed,
}

impl WindowState {
    pub fn start(self) -> Result<Self, Error> {
        match self {
            WindowState::Created | WindowState::Running => Ok(WindowState::Running),
            other => Err(anyhow!("Cannot start a window in state {:?}", other)),
        }
    }

    pub fn begin_close(self) -> Result<Self, Error> {
        match self {
            WindowState::Created | WindowState::Running => Ok(WindowState::Closing),
            other => Err(anyhow!("Cannot close a window in state {:?}", other)),
        }
    }

    pub fn finish_close(self) -> Result<Self, Error> {
        match self {
            WindowState::Closing => Ok(WindowState::Closed),
            other => Err(anyhow!("Window is not closing (state {:?})", other)),
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, WindowState::Created | WindowState::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle() {
        let state = WindowState::Created;
        let state = state.start().unwrap();
        assert_eq!(state, WindowState::Running);
        let state = state.begin_close().unwrap();
        assert_eq!(state, WindowState::Closing);
        assert!(!state.is_open());
        assert_eq!(state.finish_close().unwrap(), WindowState::Closed);
    }

    #[test]
    fn can_close_before_first_frame() {
        let state = WindowState::Created.begin_close().unwrap();
        assert_eq!(state.finish_close().unwrap(), WindowState::Closed);
    }

    #[test]
    fn closed_window_cannot_restart() {
        assert!(WindowState::Closed.start().is_err());
        assert!(WindowState::Closing.start().is_err());
        assert!(WindowState::Closed.begin_close().is_err());
        assert!(WindowState::Running.finish_close().is_err());
    }
}
