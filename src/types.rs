use serde::{Deserialize, Serialize};

/// What the node reports back for one executed transaction. Immutable
/// once parsed; consumed once to classify the outcome and pull out any
/// created objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
	pub digest: String,
	pub effects: Effects,
	#[serde(default)]
	pub object_changes: Vec<ObjectChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effects {
	pub status: EffectsStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectsStatus {
	pub status: String,
	#[serde(default)]
	pub error: Option<String>,
}

/// One reported creation/mutation/deletion of an on-chain object.
/// Non-object entries (package publishes) leave the object fields empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectChange {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub object_type: String,
	#[serde(default)]
	pub object_id: String,
}

impl SubmissionResult {
	/// Success requires both a clear error field and the canonical status
	/// token. The node has been observed setting one without the other,
	/// so checking either alone is not enough.
	pub fn is_success(&self) -> bool {
		let has_error = self
			.effects
			.status
			.error
			.as_deref()
			.is_some_and(|e| !e.is_empty());
		!has_error && self.effects.status.status == "success"
	}

	/// Message to report on failure, falling back to the status token
	/// when the node gave no error text.
	pub fn error_message(&self) -> String {
		match self.effects.status.error.as_deref() {
			Some(e) if !e.is_empty() => e.to_owned(),
			_ => format!("status {:?}", self.effects.status.status),
		}
	}

	/// First created object whose type ends with `type_suffix`. Absence
	/// is not an error; callers decide what it means.
	pub fn find_created(&self, type_suffix: &str) -> Option<&ObjectChange> {
		self.object_changes
			.iter()
			.find(|c| c.kind == "created" && c.object_type.ends_with(type_suffix))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn result(status: &str, error: Option<&str>, changes: Vec<ObjectChange>) -> SubmissionResult {
		SubmissionResult {
			digest: "9vKq7QqG2V6eBJzs5h8mFqTtdcPcrgKm5cvrF4nWz3Cn".into(),
			effects: Effects {
				status: EffectsStatus {
					status: status.into(),
					error: error.map(str::to_owned),
				},
			},
			object_changes: changes,
		}
	}

	fn created(object_type: &str) -> ObjectChange {
		ObjectChange {
			kind: "created".into(),
			object_type: object_type.into(),
			object_id: "0x77".into(),
		}
	}

	#[test]
	fn clean_status_is_success() {
		assert!(result("success", None, vec![]).is_success());
		// Empty error text counts as no error.
		assert!(result("success", Some(""), vec![]).is_success());
	}

	#[test]
	fn error_field_alone_means_failure() {
		let r = result("success", Some("MoveAbort in reward_receipt: 2"), vec![]);
		assert!(!r.is_success());
		assert_eq!(r.error_message(), "MoveAbort in reward_receipt: 2");
	}

	#[test]
	fn status_token_alone_means_failure() {
		let r = result("failure", None, vec![]);
		assert!(!r.is_success());
		assert_eq!(r.error_message(), "status \"failure\"");
	}

	#[test]
	fn find_created_matches_type_suffix() {
		let r = result(
			"success",
			None,
			vec![
				ObjectChange {
					kind: "mutated".into(),
					object_type: "0x2::coin::Coin<0x2::sui::SUI>".into(),
					object_id: "0x11".into(),
				},
				created("0xabc::reward_receipt::RewardReceipt"),
			],
		);

		let hit = r.find_created("::reward_receipt::RewardReceipt").unwrap();
		assert_eq!(hit.object_id, "0x77");
		assert_eq!(hit.kind, "created");
	}

	#[test]
	fn find_created_ignores_other_kinds_and_types() {
		let r = result(
			"success",
			None,
			vec![
				ObjectChange {
					kind: "mutated".into(),
					object_type: "0xabc::reward_receipt::RewardReceipt".into(),
					object_id: "0x11".into(),
				},
				created("0xabc::reward_receipt::WriterRole"),
			],
		);
		assert!(r.find_created("::reward_receipt::RewardReceipt").is_none());
	}

	#[test]
	fn find_created_on_empty_changes_is_none() {
		let r = result("success", None, vec![]);
		assert!(r.find_created("::reward_receipt::RewardReceipt").is_none());
	}

	#[test]
	fn parses_node_response_shape() {
		let raw = serde_json::json!({
			"digest": "DigestAbc123",
			"effects": {
				"status": { "status": "success" },
				"gasUsed": { "computationCost": "1000000" }
			},
			"objectChanges": [
				{
					"type": "published",
					"packageId": "0xabc",
					"modules": ["reward_receipt"]
				},
				{
					"type": "created",
					"sender": "0xdead",
					"objectType": "0xabc::reward_receipt::RewardReceipt",
					"objectId": "0x99",
					"version": "3"
				}
			]
		});

		let parsed: SubmissionResult = serde_json::from_value(raw).unwrap();
		assert!(parsed.is_success());
		let hit = parsed.find_created("::reward_receipt::RewardReceipt").unwrap();
		assert_eq!(hit.object_id, "0x99");
	}
}
