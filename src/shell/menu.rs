//! Menu dispatch tables.

use std::fmt;

/// A finite set of numbered choices shown as one menu.
pub trait MenuChoice: Sized + Copy + fmt::Debug {
    /// Text printed before each prompt
    const MENU: &'static str;

    /// Choice selected by the user's input, `None` for anything unrecognized
    fn parse(input: &str) -> Option<Self>;

    /// Whether this choice leaves the menu
    fn leaves(self) -> bool;
}

/// Top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    OpenClose,
    OpenCloseTry,
    OpenCloseScoped,
    ReadMenu,
    WriteMenu,
    Append,
    FolderPath,
    Exit,
}

impl MenuChoice for MainChoice {
    const MENU: &'static str = "
    1) Basic Open and Close
    2) Open and Close using Try
    3) Open and Close using With
    4) Read File Menu
    5) Write File Menu
    6) Append to File
    7) Get Folder Path
    0) Exit
    ";

    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::OpenClose),
            "2" => Some(Self::OpenCloseTry),
            "3" => Some(Self::OpenCloseScoped),
            "4" => Some(Self::ReadMenu),
            "5" => Some(Self::WriteMenu),
            "6" => Some(Self::Append),
            "7" => Some(Self::FolderPath),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }

    fn leaves(self) -> bool {
        self == Self::Exit
    }
}

/// Read submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadChoice {
    ReadBytes,
    ReadOneLine,
    ReadTwoLines,
    ReadAllLines,
    Back,
}

impl MenuChoice for ReadChoice {
    const MENU: &'static str = "
    1) Read File
    2) Read File One Line
    3) Read File Two Lines
    4) Read File All Lines
    0) Previous Menu
    ";

    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ReadBytes),
            "2" => Some(Self::ReadOneLine),
            "3" => Some(Self::ReadTwoLines),
            "4" => Some(Self::ReadAllLines),
            "0" => Some(Self::Back),
            _ => None,
        }
    }

    fn leaves(self) -> bool {
        self == Self::Back
    }
}

/// Write submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteChoice {
    Truncate,
    WriteOneString,
    WriteTwoStrings,
    WriteLines,
    WriteMultipleLines,
    CopyUppercase,
    Back,
}

impl MenuChoice for WriteChoice {
    const MENU: &'static str = "
    1) Write File
    2) Write One String to File
    3) Write Two Strings to File
    4) Write Lines to File
    5) Write Multiple Lines to File
    6) Copy Content from File to File
    0) Previous Menu
    ";

    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Truncate),
            "2" => Some(Self::WriteOneString),
            "3" => Some(Self::WriteTwoStrings),
            "4" => Some(Self::WriteLines),
            "5" => Some(Self::WriteMultipleLines),
            "6" => Some(Self::CopyUppercase),
            "0" => Some(Self::Back),
            _ => None,
        }
    }

    fn leaves(self) -> bool {
        self == Self::Back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_parsing() {
        assert_eq!(MainChoice::parse("1"), Some(MainChoice::OpenClose));
        assert_eq!(MainChoice::parse("2"), Some(MainChoice::OpenCloseTry));
        assert_eq!(MainChoice::parse(" 7\n"), Some(MainChoice::FolderPath));
        assert_eq!(MainChoice::parse("0"), Some(MainChoice::Exit));
        assert_eq!(MainChoice::parse("8"), None);
        assert_eq!(MainChoice::parse("exit"), None);
        assert_eq!(MainChoice::parse(""), None);
    }

    #[test]
    fn test_submenus_parse_back() {
        assert!(ReadChoice::parse("0").unwrap().leaves());
        assert!(WriteChoice::parse("0").unwrap().leaves());
        assert!(!WriteChoice::parse("6").unwrap().leaves());
        assert_eq!(ReadChoice::parse("5"), None);
    }

    #[test]
    fn test_every_menu_line_parses() {
        fn check<C: MenuChoice>() {
            for line in C::MENU.lines().map(str::trim).filter(|l| !l.is_empty()) {
                let (digit, _) = line.split_once(')').expect("menu line has a number");
                assert!(C::parse(digit).is_some(), "unparsed menu entry {:?}", line);
            }
        }
        check::<MainChoice>();
        check::<ReadChoice>();
        check::<WriteChoice>();
    }
}
