// Career counselling: user classification, prompt construction, skill-gap diffing
// and the `/chat` + `/analyze` pipelines.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod classifier;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod skill_gap;

#[cfg(test)]
pub mod testing;
