use super::model::{AnnotatedRecord, Grade, GradeDistribution, GradeGroups};

/// Count and collect records per grade in a single pass.
///
/// Both maps list grades in the order they are first seen; each group keeps
/// the input order of its members.
pub fn group(annotated: &[AnnotatedRecord]) -> (GradeDistribution, GradeGroups) {
    let mut distribution = GradeDistribution::new();
    let mut groups = GradeGroups::new();

    for rec in annotated {
        *distribution.entry(rec.grade).or_insert(0) += 1;
        groups.entry(rec.grade).or_default().push(rec.clone());
    }
    (distribution, groups)
}

/// Members of one grade, empty when nobody earned it.
pub fn lookup(groups: &GradeGroups, grade: Grade) -> &[AnnotatedRecord] {
    groups.get(&grade).map(Vec::as_slice).unwrap_or(&[])
}
