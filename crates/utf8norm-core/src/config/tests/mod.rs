mod tests_batch_config;
