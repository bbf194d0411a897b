pub mod crud;
pub mod mock_data;
