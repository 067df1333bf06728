pub mod truck_data_repo;
