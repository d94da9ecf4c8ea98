use std::path::PathBuf;

use clap::Parser;

use crate::game::story::DEFAULT_STORY_PATH;


#[derive(Parser, Debug)]
#[command(name = "millionaire_tycoon", version, about = "You are a million dollars in debt. Figure something out.")]
pub struct Arguments {
    /// Story file shown after the banner
    #[arg(long = "story", value_name = "PATH", default_value = DEFAULT_STORY_PATH)]
    pub story_path: PathBuf,

    /// Do not print the story
    #[arg(long)]
    pub skip_story: bool,

    /// Do not show the options menu
    #[arg(long)]
    pub skip_menu: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_everything() {
        let args = Arguments::try_parse_from(["millionaire_tycoon"]).unwrap();
        assert_eq!(args.story_path, PathBuf::from("text/example.txt"));
        assert!(!args.skip_story);
        assert!(!args.skip_menu);
        assert!(!args.verbose);
    }

    #[test]
    fn all_flags_parse() {
        let args = Arguments::try_parse_from([
            "millionaire_tycoon", "--story", "intro.txt", "--skip-story", "--skip-menu", "-v",
        ]).unwrap();
        assert_eq!(args.story_path, PathBuf::from("intro.txt"));
        assert!(args.skip_story);
        assert!(args.skip_menu);
        assert!(args.verbose);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Arguments::try_parse_from(["millionaire_tycoon", "--difficulty", "hard"]).is_err());
    }
}
