pub const TEST_API_URL: &str = "https://api.paws.test";
pub const TEST_TOKEN: &str = "test-token";
pub const TEST_PAGE_SIZE: usize = 12;
