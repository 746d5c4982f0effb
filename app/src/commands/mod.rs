pub mod config;
pub mod predict;
pub mod scene;

use serde::Deserialize;
use serde_json::Value;

use crate::state::AppState;
use predict::PredictArgs;

/// One call from the page, tagged by command name
#[derive(Deserialize, Debug)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Invocation {
    GetConfig,
    GetFoodOptions,
    Predict(PredictArgs),
}

/// Route an invocation to its handler
pub fn invoke(state: &AppState, invocation: Invocation) -> Result<Value, String> {
    let value = match invocation {
        Invocation::GetConfig => serde_json::to_value(config::get_config(state)),
        Invocation::GetFoodOptions => serde_json::to_value(config::get_food_options()),
        Invocation::Predict(args) => serde_json::to_value(predict::predict(state, args)?),
    };
    value.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use estimator::Estimator;

    fn call(state: &AppState, json: &str) -> Result<Value, String> {
        let invocation: Invocation = serde_json::from_str(json).map_err(|e| e.to_string())?;
        invoke(state, invocation)
    }

    #[test]
    fn test_predict_invocation() {
        let state = AppState::new(Estimator::default(), Some(1));
        let value = call(
            &state,
            r#"{"cmd":"predict","form":{"name":"Kim","age":"78","gender":"male","food":"sandwich"}}"#,
        )
        .unwrap();
        assert_eq!(value["report"]["prediction"]["baseLifeExpectancy"], 82);
        assert_eq!(value["report"]["genderLine"], "Gender: Male");
        assert_eq!(value["scene"]["pose"], "standing");
        assert!(value["scene"]["leftPx"].is_number());
        assert!(value["scene"]["disappearAfterMs"].is_null());
        assert!(value["timeLines"].is_array());
        assert!(value.get("time_lines").is_none());
    }

    #[test]
    fn test_config_invocations() {
        let state = AppState::new(Estimator::default(), None);
        let options = call(&state, r#"{"cmd":"get_food_options"}"#).unwrap();
        assert_eq!(options[0]["name"], "Fresh Salad");

        let config = call(&state, r#"{"cmd":"get_config"}"#).unwrap();
        assert_eq!(config["genderModifiers"]["female"], 1.05);
        assert_eq!(config["ageBands"]["youngMax"], 35);
        assert_eq!(config["scene"]["coffinWidth"], 175.0);
        assert!(config["seed"].is_null());
    }

    #[test]
    fn test_unknown_command() {
        let state = AppState::new(Estimator::default(), None);
        assert!(call(&state, r#"{"cmd":"reap"}"#).is_err());
    }
}
