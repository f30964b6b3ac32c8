pub mod mock_users_seed;
