pub mod analyze_symptoms;
