//! Fixed terminal screens and messages

use super::command::Command;

pub const PROMPT: &str = "visitor@Danu.me:~$ ";

pub const NOT_FOUND: &str = "Command not found. Type 'help' to see available commands.";

pub const SU_MESSAGE: &str = "It doesn't do anything now, but it will be soon. 😏";

pub const BANNER: &str = r#"Danu, All rights reserved.

       _____
      |  __ \
      | |  | | __ _ _ __  _   _
      | |  | |/ _` | '_ \| | | |
      | |__| | (_| | | | | |_| |
      |_____/ \__,_|_| |_|\__,_|



Welcome to my personal website.
For a list of available commands, type 'help'.
"#;

/// Simulated kernel boot log replayed before the banner
pub const BOOT_SEQUENCE: &str = "Booting up the terminal ...
Loading the system ...

Loading initial ramdisk ...

[    0.000000]   Website version 0.0.0.1 (buildd@nextjs) (tailwindcss@3.3.3) (shadcnui) Wed  22 13:40:32 2025
[    0.000000]   Command line: BOOT_IMAGE=/boot/vmlinuz-5.4.0-42-generic root=UUID=abcd1234 ro quiet splash
[    0.000000]   AMD AuthenticAMD
...
[    0.246920] ACPI: Core revision 20200120
...
[ OK ] Started GNOME Display Manager.
[ OK ] Reached target Graphical Interface.

Personal Website 0.0.0.1 LTS

my-machine login: visitor
";

/// `help` output: the vocabulary joined in enumeration order
pub fn help_text() -> String {
    let names: Vec<_> = Command::ALL.iter().map(Command::as_str).collect();
    format!("Available commands: {}", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_vocabulary_in_order() {
        assert_eq!(
            help_text(),
            "Available commands: whois, experiences, projects, social, banner, clear, help, su, cv"
        );
    }

    #[test]
    fn test_banner_ends_with_usage_hint() {
        assert!(BANNER.ends_with("For a list of available commands, type 'help'.\n"));
        assert!(BANNER.contains(r"|_____/ \__,_|_| |_|\__,_|"));
    }

    #[test]
    fn test_boot_sequence_ends_at_login() {
        assert!(BOOT_SEQUENCE.trim_end().ends_with("my-machine login: visitor"));
    }
}
