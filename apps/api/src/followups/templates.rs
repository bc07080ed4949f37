use crate::followups::models::{FollowUpTemplate, FollowUpType};

const APPLIED_3D: FollowUpTemplate = FollowUpTemplate {
    subject: "Following up on my application for [Job Title]",
    body: "Hi [Name],\n\n\
I hope you're doing well. I applied for the [Job Title] position on [Date] and wanted to \
follow up to confirm my application was received.\n\n\
I'm excited about the opportunity and would welcome the chance to discuss how my \
background could contribute to the team.\n\n\
Best regards,\n[Your Name]",
};

const APPLIED_7D: FollowUpTemplate = FollowUpTemplate {
    subject: "Checking in on the [Job Title] role",
    body: "Hi [Name],\n\n\
I'm writing to check in on my application for the [Job Title] position, submitted on [Date]. \
I remain very interested in the role.\n\n\
My experience with [Relevant Skills] lines up closely with what you're looking for, and I'd \
be glad to share more detail or answer any questions.\n\n\
Thank you for your time,\n[Your Name]",
};

const INTERVIEW_2D: FollowUpTemplate = FollowUpTemplate {
    subject: "Thank you for the [Job Title] interview",
    body: "Hi [Name],\n\n\
Thank you for taking the time to speak with me on [Date] about the [Job Title] position. \
I enjoyed learning more about the team and the work ahead.\n\n\
Our conversation reinforced my enthusiasm for the role, especially the chance to apply my \
experience with [Relevant Skills].\n\n\
Best regards,\n[Your Name]",
};

const INTERVIEW_5D: FollowUpTemplate = FollowUpTemplate {
    subject: "Following up on our [Job Title] conversation",
    body: "Hi [Name],\n\n\
I wanted to follow up on my interview for the [Job Title] position on [Date]. \
I'm still very interested and would appreciate any update you can share on the next steps \
or timeline.\n\n\
Please let me know if there's anything else I can provide.\n\n\
Best regards,\n[Your Name]",
};

/// Static message template for a reminder kind.
pub fn get_follow_up_template(follow_up_type: FollowUpType) -> FollowUpTemplate {
    match follow_up_type {
        FollowUpType::Applied3d => APPLIED_3D,
        FollowUpType::Applied7d => APPLIED_7D,
        FollowUpType::Interview2d => INTERVIEW_2D,
        FollowUpType::Interview5d => INTERVIEW_5D,
    }
}
