//! Narrative-service prompt template and attachment selection.

use std::fmt::Write as _;

use claimguard_core::models::{ClaimInput, ProofFile};
use claimguard_core::traits::{Attachment, NarrativeRequest};
use tracing::debug;

/// Render the fixed analysis prompt for a claim.
///
/// Only the first `max_files` documents are listed; the total count is still
/// reported in the header.
pub fn build_prompt(claim: &ClaimInput, files: &[ProofFile], max_files: usize) -> String {
    let mut documents = String::new();
    if files.is_empty() {
        documents.push_str(
            "\nWARNING: NO MEDICAL DOCUMENTS UPLOADED - This significantly increases fraud risk.\n",
        );
    } else {
        let _ = writeln!(documents, "\nUPLOADED MEDICAL DOCUMENTS ({} files):", files.len());
        for (idx, file) in files.iter().take(max_files).enumerate() {
            let _ = writeln!(
                documents,
                "{}. {} ({}, {:.1} KB)",
                idx + 1,
                file.filename,
                file.mimetype,
                file.size_kb()
            );
        }
        documents.push_str(
            "\nIMPORTANT: Analyze the uploaded medical documents (bills, prescriptions, reports) \
             along with the claim details. Verify if the documents support the claimed diagnosis \
             and amount.\n",
        );
    }

    let description = if claim.description.is_empty() {
        "No description provided"
    } else {
        claim.description.as_str()
    };

    format!(
        "You are an expert medical insurance fraud detection analyst. Analyze this insurance \
claim for potential fraud, overbilling, or irregularities.

CLAIM DETAILS:
- Patient Name: {patient}
- Claim Type: {claim_type}
- Amount Claimed: {amount}
- Diagnosis: {diagnosis}
- Policy Number: {policy}
- Hospital: {hospital}
{documents}
DETAILED DESCRIPTION:
{description}

YOUR ANALYSIS TASK:

1. Document Verification (if files uploaded):
   - Check if medical documents are authentic and relevant
   - Verify bills, prescriptions, and reports match the diagnosis
   - Look for altered or suspicious documents

2. Medical Consistency:
   - Does the claimed amount match typical costs for this diagnosis?
   - Is the diagnosis consistent with described treatment?
   - Are there any medical red flags?

3. Fraud Pattern Detection:
   - Overbilling indicators
   - Suspicious claim patterns
   - Missing critical information
   - Inconsistencies in medical details

4. Documentation Quality:
   - Completeness of claim description
   - Quality and quantity of supporting documents
   - Missing essential documentation

PROVIDE YOUR ANALYSIS IN THIS EXACT FORMAT:

FRAUD RISK ASSESSMENT: [0-100]%

DOCUMENT ANALYSIS:
[If documents uploaded, analyze their authenticity and relevance]
[If no documents, flag this as a major concern]

MEDICAL CONSISTENCY CHECK:
[Evaluate if diagnosis matches treatment and costs]

RED FLAGS IDENTIFIED:
- [One flag per line]

POSITIVE INDICATORS:
- [One indicator per line]

RECOMMENDATION: [APPROVE / REQUIRES_REVIEW / REJECT]

DETAILED EXPLANATION:
[3-4 sentences explaining the assessment]

Return only the analysis text in the format above, as plain natural language \
for claim reviewers. Do not include code or markdown code blocks.",
        patient = or_na(&claim.patient_name),
        claim_type = claim.claim_type,
        amount = claim.amount,
        diagnosis = or_na(&claim.diagnosis),
        policy = or_na(&claim.policy_number),
        hospital = if claim.hospital_name.is_empty() {
            "Medical Facility"
        } else {
            claim.hospital_name.as_str()
        },
    )
}

/// Inline attachments for the first `max_files` documents.
///
/// Only `image/*` payloads are sent. PDFs and every other type are skipped
/// without error.
pub fn select_attachments(files: &[ProofFile], max_files: usize) -> Vec<Attachment> {
    files
        .iter()
        .take(max_files)
        .filter(|file| {
            if file.is_image() {
                true
            } else {
                debug!(
                    filename = %file.filename,
                    mimetype = %file.mimetype,
                    pdf = file.is_pdf(),
                    "attachment skipped: not an image"
                );
                false
            }
        })
        .map(|file| Attachment {
            mime_type: file.mimetype.clone(),
            data: file.data.clone(),
        })
        .collect()
}

/// Prompt plus eligible attachments. Text-only when no file is an image.
pub fn build_request(claim: &ClaimInput, files: &[ProofFile], max_files: usize) -> NarrativeRequest {
    NarrativeRequest {
        prompt: build_prompt(claim, files, max_files),
        attachments: select_attachments(files, max_files),
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}
