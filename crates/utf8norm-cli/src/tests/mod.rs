mod tests_cli_parse;
mod tests_pause;
