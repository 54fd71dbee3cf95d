//! How many groups of each size a category needs.

use crate::models::ScheduleError;
use serde::{Deserialize, Serialize};

/// Number of groups of the main size and of the remainder size.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCounts {
    pub num_groups_main: usize,
    pub num_groups_remainder: usize,
}

impl GroupCounts {
    pub fn total(&self) -> usize {
        self.num_groups_main + self.num_groups_remainder
    }
}

/// Split `entries` into groups of `per_group_main`, using `per_group_remainder`
/// groups to absorb what doesn't divide evenly.
///
/// When the remainder size is larger, leftover entries each grow one group;
/// when it is smaller, the missing seats each shrink one group.
pub fn calculate_groups(
    entries: usize,
    per_group_main: usize,
    per_group_remainder: usize,
) -> Result<GroupCounts, ScheduleError> {
    let invalid = ScheduleError::InvalidGroupSizes {
        entries,
        per_group_main,
        per_group_remainder,
    };
    if per_group_main == 0 {
        return Err(invalid);
    }

    if per_group_main < per_group_remainder {
        let remainder = entries % per_group_main;
        let main = (entries / per_group_main)
            .checked_sub(remainder)
            .ok_or(invalid)?;
        Ok(GroupCounts {
            num_groups_main: main,
            num_groups_remainder: remainder,
        })
    } else {
        let groups = entries.div_ceil(per_group_main);
        let remainder = groups * per_group_main - entries;
        let main = groups.checked_sub(remainder).ok_or(invalid)?;
        Ok(GroupCounts {
            num_groups_main: main,
            num_groups_remainder: remainder,
        })
    }
}
