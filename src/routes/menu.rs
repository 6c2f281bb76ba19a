// src/routes/menu.rs
use std::str::FromStr;

use crate::error::MenuError;
use crate::services::responder::Function;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Dispatch(Function),
    Statistics,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Dispatch(Function::Questions)),
            "2" => Ok(MenuChoice::Dispatch(Function::Summarize)),
            "3" => Ok(MenuChoice::Dispatch(Function::Creative)),
            "4" => Ok(MenuChoice::Dispatch(Function::Advice)),
            "5" => Ok(MenuChoice::Statistics),
            "6" => Ok(MenuChoice::Exit),
            other => Err(MenuError::InvalidChoice(other.to_string())),
        }
    }
}
