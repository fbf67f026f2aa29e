// src/args.rs
use std::path::Path;

/// Which counts were requested on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet {
    pub lines: bool,
    pub words: bool,
    pub bytes: bool,
    pub chars: bool,
}

impl FlagSet {
    /// Records `letter`, returning false for letters outside `l`, `w`, `c`, `m`.
    fn enable(&mut self, letter: char) -> bool {
        match letter {
            'l' => self.lines = true,
            'w' => self.words = true,
            'c' => self.bytes = true,
            'm' => self.chars = true,
            _ => return false,
        }
        true
    }

    /// True when no counting flag was given.
    pub fn is_empty(&self) -> bool {
        !(self.lines || self.words || self.bytes || self.chars)
    }

    /// The set that drives counting: an empty set means the default triple
    /// of lines, words and bytes. Characters are never part of the default.
    pub fn effective(self) -> FlagSet {
        if self.is_empty() {
            FlagSet {
                lines: true,
                words: true,
                bytes: true,
                chars: false,
            }
        } else {
            self
        }
    }
}

/// A parsed command line: the requested counts plus the files to process.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub flags: FlagSet,
    pub files: Vec<String>,
}

/// Scans `args` (the process arguments without the program name) into an
/// [`Invocation`].
///
/// Option tokens are only recognized before the first argument that does not
/// start with `-`; everything from that argument on is a file path candidate,
/// even if it looks like an option. Candidates that are not regular files are
/// reported on stdout and dropped. Returns `None` after printing the usage
/// message when an option letter is not recognized.
pub fn parse(args: &[String]) -> Option<Invocation> {
    let mut flags = FlagSet::default();
    let mut first_path = args.len();

    for (index, arg) in args.iter().enumerate() {
        // Only one dash is stripped, so `--lines` is validated as `-lines`
        // and rejected on its leading `-`.
        let Some(letters) = arg.strip_prefix('-') else {
            first_path = index;
            break;
        };
        for letter in letters.chars() {
            if !flags.enable(letter) {
                println!("ccwc: illegal option -- {}", letter);
                println!("usage: ccwc [-clmw] [file ...]");
                return None;
            }
        }
    }

    let mut files = Vec::new();
    for path in &args[first_path..] {
        if Path::new(path).is_file() {
            files.push(path.clone());
        } else {
            println!("ccwc: {}: open: No such file or directory", path);
        }
    }

    Some(Invocation { flags, files })
}
