mod tests_chardet;
