pub const QUALITY_PROMPT: &str = "This is a still image from an outdoor trail camera. Rate its image quality on a scale of 1-5 (5 is the best), especially considering motion blur and clarity of the subject. Your response MUST be a single number.";

pub fn classification_prompt(region: &str) -> String {
    format!(
        "This is an image frame from an outdoor trail camera in {}. If the image shows an animal, identify what kind of animal it is. Your response MUST be a single word. If there is no animal, reply with \"none\". If there is an animal but you can't guess what it is, reply \"unknown\".",
        region
    )
}
