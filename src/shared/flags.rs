/// Splits a flags string such as `"--ignore RUSTSEC-2020-0071 --no-fetch"`
/// into individual arguments. Blank input yields no arguments.
pub fn parse_command_flags(flags: &str) -> Vec<String> {
    flags.split_whitespace().map(str::to_string).collect()
}
