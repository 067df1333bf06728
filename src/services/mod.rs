pub mod truck_pipeline;
