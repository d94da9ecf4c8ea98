use fxhash::FxHashMap;

pub mod story;


#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Gambler,
    Daytrader,
    Dealer,
}

impl Mode {
    pub fn value(&self) -> &'static str {
        return match self {
            Mode::Gambler   => "Gambler",
            Mode::Daytrader => "Daytrader",
            Mode::Dealer    => "Dealer",
        };
    }

    pub fn key(&self) -> &'static str {
        return match self {
            Mode::Gambler   => "1",
            Mode::Daytrader => "2",
            Mode::Dealer    => "3",
        };
    }

    pub fn all() -> [Mode; 3] {
        return [Mode::Gambler, Mode::Daytrader, Mode::Dealer];
    }

    pub fn selected_message(&self) -> String {
        return format!("{} mode selected. This feature is not yet implemented.", self.value());
    }
}


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Mode(Mode),
    Exit,
    Invalid,
}

lazy_static! {
    static ref CHOICES: FxHashMap<&'static [u8], Choice> = {
        let mut choices: FxHashMap<&'static [u8], Choice> = FxHashMap::default();
        for mode in Mode::all() {
            choices.insert(mode.key().as_bytes(), Choice::Mode(mode));
        }
        choices.insert(b"exit", Choice::Exit);
        choices.insert(b"quit", Choice::Exit);
        choices
    };
}

impl Choice {
    /// Exact byte match only: no trimming, no case folding.
    pub fn parse(input: &[u8]) -> Choice {
        return match CHOICES.get(input) {
            Some(choice) => *choice,
            None => Choice::Invalid,
        };
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_keys_select_modes() {
        assert_eq!(Choice::parse(b"1"), Choice::Mode(Mode::Gambler));
        assert_eq!(Choice::parse(b"2"), Choice::Mode(Mode::Daytrader));
        assert_eq!(Choice::parse(b"3"), Choice::Mode(Mode::Dealer));
    }

    #[test]
    fn exit_and_quit_both_exit() {
        assert_eq!(Choice::parse(b"exit"), Choice::Exit);
        assert_eq!(Choice::parse(b"quit"), Choice::Exit);
    }

    #[test]
    fn near_misses_are_invalid() {
        for input in ["", "0", "4", " 1", "1 ", "01", "EXIT", "Quit", "exit\n", "exit\r", "gambler"] {
            assert_eq!(Choice::parse(input.as_bytes()), Choice::Invalid, "input {:?}", input);
        }
        assert_eq!(Choice::parse(b"\xc3"), Choice::Invalid);
    }

    #[test]
    fn mode_messages() {
        assert_eq!(Mode::Gambler.selected_message(), "Gambler mode selected. This feature is not yet implemented.");
        assert_eq!(Mode::Daytrader.selected_message(), "Daytrader mode selected. This feature is not yet implemented.");
        assert_eq!(Mode::Dealer.selected_message(), "Dealer mode selected. This feature is not yet implemented.");
    }
}
