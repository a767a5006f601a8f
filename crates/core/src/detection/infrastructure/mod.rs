pub mod precomputed_landmarks;
